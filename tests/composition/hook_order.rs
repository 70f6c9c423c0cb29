use role_link::{ MemoryEnvironment, ModuleId, PluggableHost, Role, Value };

use crate::fixture_host::{ record_trail, BASE_TYPE, WIDGET_TYPE };

/// A host whose `work` method records its execution in the `trail` attribute.
fn trail_host() -> PluggableHost {
	let mut host = PluggableHost::new(
		WIDGET_TYPE,
		[ ModuleId::new( WIDGET_TYPE ), ModuleId::new( BASE_TYPE ) ],
	);
	host.define_method( "work", | attributes, _arguments | {
		record_trail( attributes, "body" );
		Value::Unit
	});
	host
}

#[test]
fn before_runs_newest_first_and_after_runs_newest_last() {

	let mut environment = MemoryEnvironment::new();
	environment
		.install_role(
			"TestApp::Widget::Plugin::First",
			Role::new()
				.before( "work", | attributes, _arguments | record_trail( attributes, "b1" ))
				.after( "work", | attributes, _arguments | record_trail( attributes, "a1" )),
		)
		.install_role(
			"TestApp::Widget::Plugin::Second",
			Role::new()
				.before( "work", | attributes, _arguments | record_trail( attributes, "b2" ))
				.after( "work", | attributes, _arguments | record_trail( attributes, "a2" )),
		);
	let mut host = trail_host();

	host.load_plugins( &mut environment, &[ "First", "Second" ])
		.expect( "Failed to load plugins" );
	host.call( "work", &[] ).expect( "Dispatch failed" );

	assert_eq!( host.attribute( "trail" ), Some( &Value::str( "b2 b1 body a1 a2" )));

}

#[test]
fn hooks_stay_outside_every_wrap_layer() {

	let mut environment = MemoryEnvironment::new();
	environment
		.install_role(
			"TestApp::Widget::Plugin::Hooks",
			Role::new()
				.before( "work", | attributes, _arguments | record_trail( attributes, "before" ))
				.after( "work", | attributes, _arguments | record_trail( attributes, "after" )),
		)
		.install_role(
			"TestApp::Widget::Plugin::Layer",
			Role::new().wrap( "work", | attributes, next, arguments | {
				record_trail( attributes, "wrap-in" );
				let value = next.call( attributes, arguments );
				record_trail( attributes, "wrap-out" );
				value
			}),
		);
	let mut host = trail_host();

	host.load_plugins( &mut environment, &[ "Hooks", "Layer" ])
		.expect( "Failed to load plugins" );
	host.call( "work", &[] ).expect( "Dispatch failed" );

	assert_eq!(
		host.attribute( "trail" ),
		Some( &Value::str( "before wrap-in body wrap-out after" )),
	);

}
