use role_link::{ MemoryEnvironment, ModuleId, Role, Value };

use crate::fixture_host::{ scenario_environment, widget_host };

#[test]
fn loading_the_same_name_twice_applies_once() {

	let mut environment = scenario_environment();
	let mut host = widget_host();

	host.load_plugin( &mut environment, "Foo" ).expect( "Failed to load plugin" );
	host.load_plugin( &mut environment, "Foo" ).expect( "Failed to load plugin again" );

	// A second layer would read "around foo  around foo  original foo".
	assert_eq!(
		host.call( "foo", &[] ).expect( "Dispatch failed" ).to_string(),
		"around foo  original foo",
	);
	assert_eq!( environment.load_count( &ModuleId::new( "TestApp::Widget::Plugin::Foo" )), 1 );
	assert_eq!( host.loaded_plugins().count(), 1 );

}

#[test]
fn duplicate_names_within_one_batch_collapse() {

	let mut environment = scenario_environment();
	let mut host = widget_host();

	host.load_plugins( &mut environment, &[ "Foo", "Foo" ])
		.expect( "Failed to load plugins" );

	assert_eq!(
		host.call( "foo", &[] ).expect( "Dispatch failed" ).to_string(),
		"around foo  original foo",
	);

}

#[test]
fn attributes_merge_only_if_absent() {

	let mut environment = MemoryEnvironment::new();
	environment.install_role(
		"TestApp::Widget::Plugin::Colorful",
		Role::new()
			.method( "paint", | attributes, _arguments | {
				attributes.get( "color" ).cloned().unwrap_or_default()
			})
			.attribute( "color", Value::str( "blue" )),
	);
	let mut host = widget_host();
	host.set_attribute( "color", Value::str( "red" ));

	host.load_plugin( &mut environment, "Colorful" ).expect( "Failed to load plugin" );

	assert_eq!( host.attribute( "color" ), Some( &Value::str( "red" )));
	assert_eq!( host.call( "paint", &[] ).expect( "Dispatch failed" ).to_string(), "red" );

}

#[test]
fn a_declared_method_never_replaces_an_existing_one() {

	let mut environment = MemoryEnvironment::new();
	environment.install_role(
		"TestApp::Widget::Plugin::Usurper",
		Role::new().method( "foo", | _attributes, _arguments | Value::str( "usurped foo" )),
	);
	let mut host = widget_host();

	host.load_plugin( &mut environment, "Usurper" ).expect( "Failed to load plugin" );

	assert_eq!(
		host.call( "foo", &[] ).expect( "Dispatch failed" ).to_string(),
		"original foo",
	);

}
