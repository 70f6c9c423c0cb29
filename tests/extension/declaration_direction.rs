use role_link::ModuleId ;

use crate::fixture_host::{ scenario_environment, widget_host };

#[test]
fn only_the_newly_loaded_plugin_declares_the_extensions_that_fire() {

	let mut environment = scenario_environment();
	let mut host = widget_host();

	// Baz first: its extension targets Bar, which isn't loaded yet.
	host.load_plugin( &mut environment, "Baz" ).expect( "Failed to load Baz" );
	host.load_plugin( &mut environment, "Bar" ).expect( "Failed to load Bar" );

	// Bar declares no extensions of its own, so Baz's patch for Bar never ran.
	assert_eq!(
		host.call( "bar", &[] ).expect( "Dispatch failed" ).to_string(),
		"override bar",
	);
	assert!( !host.does( &ModuleId::new( "TestApp::Widget::Plugin::Baz::ExtensionFor::Bar" )));

}

#[test]
fn a_late_plugin_patches_every_earlier_one() {

	let mut environment = scenario_environment();
	let mut host = widget_host();

	host.load_plugins( &mut environment, &[ "Bar", "Baz" ])
		.expect( "Failed to load plugins" );
	host.load_plugin( &mut environment, "Foo" ).expect( "Failed to load Foo" );

	assert!( host.does( &ModuleId::new( "TestApp::Widget::Plugin::Foo::ExtensionFor::Bar" )));
	assert!( host.does( &ModuleId::new( "TestApp::Widget::Plugin::Foo::ExtensionFor::Baz" )));

}
