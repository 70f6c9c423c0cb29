use role_link::PluginError ;

use crate::fixture_host::{ scenario_environment, widget_host };

#[test]
fn earlier_successes_survive_a_failing_batch() {

	let mut environment = scenario_environment();
	let mut host = widget_host();

	match host.load_plugins( &mut environment, &[ "Bar", "Unknown" ]) {
		Err( PluginError::PluginNotFound( name )) => assert_eq!( name, "Unknown" ),
		outcome => panic!( "Expected PluginNotFound, found: {:?}", outcome ),
	}

	// Bar stays composed; nothing is rolled back.
	assert!( host.is_loaded( "Bar" ));
	assert!( !host.is_loaded( "Unknown" ));
	assert_eq!(
		host.call( "bar", &[] ).expect( "Dispatch failed" ).to_string(),
		"override bar",
	);

	// The host remains fully usable for later loads.
	host.load_plugin( &mut environment, "Baz" )
		.expect( "Failed to load after failed batch" );
	assert_eq!(
		host.call( "bar", &[] ).expect( "Dispatch failed" ).to_string(),
		"baz'd bar  override bar",
	);

}

#[test]
fn a_failure_stops_the_rest_of_the_batch() {

	let mut environment = scenario_environment();
	let mut host = widget_host();

	assert!( host.load_plugins( &mut environment, &[ "Unknown", "Bar" ]).is_err() );

	assert!( !host.is_loaded( "Bar" ));
	assert_eq!(
		host.call( "bar", &[] ).expect( "Dispatch failed" ).to_string(),
		"original bar",
	);

}
