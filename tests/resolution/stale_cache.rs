use role_link::{ MemoryEnvironment, ModuleId, Role, Value };

use crate::fixture_host::widget_host ;

#[test]
fn late_installs_need_cache_invalidation() {

	let mut environment = MemoryEnvironment::new();
	let mut host = widget_host();

	// The first failed lookup builds and caches the module enumeration.
	assert!( host.load_plugin( &mut environment, "Late" ).is_err() );

	environment.install_role(
		"TestApp::Widget::Plugin::Late",
		Role::new().method( "late", | _attributes, _arguments | Value::str( "late" )),
	);
	assert!( host.load_plugin( &mut environment, "Late" ).is_err() );

	host.invalidate_module_cache();
	host.load_plugin( &mut environment, "Late" )
		.expect( "Failed to load after invalidation" );
	assert!( host.is_loaded( "Late" ));

}

#[test]
fn changing_the_search_namespaces_rebuilds_the_enumeration() {

	let mut environment = MemoryEnvironment::new();
	environment.install_role(
		"Other::Plugin::Thing",
		Role::new().method( "thing", | _attributes, _arguments | Value::str( "thing" )),
	);
	let mut host = widget_host();

	assert!( host.load_plugin( &mut environment, "Thing" ).is_err() );

	host.set_search_namespaces([ ModuleId::new( "Other" ) ]);
	host.load_plugin( &mut environment, "Thing" )
		.expect( "Failed to load after namespace change" );
	assert_eq!(
		host.resolved_module_of( "Thing" ),
		Some( &ModuleId::new( "Other::Plugin::Thing" )),
	);

}
