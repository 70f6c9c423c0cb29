/// Shared scenario: a `TestApp::Widget` host with base methods `foo` and
/// `bar`, and an environment holding the plugins `Foo`, `Bar`, `Baz` plus the
/// extension bundles they declare for each other.
#[allow( dead_code )]
mod fixture_host {

	use std::sync::{ Arc, Mutex };

	use role_link::{
		Attributes, MemoryEnvironment, ModuleId, OverrideWarning, PluggableHost, Role, Value,
		WarningSink,
	};

	pub const WIDGET_TYPE: &str = "TestApp::Widget" ;
	pub const BASE_TYPE: &str = "TestApp::Base" ;

	/// A warning sink that keeps everything it receives, for later assertion.
	#[derive( Debug, Clone, Default )]
	pub struct CollectSink {
		warnings: Arc<Mutex<Vec<OverrideWarning>>>,
	}

	impl CollectSink {

		pub fn new() -> Self {
			Self::default()
		}

		pub fn warnings( &self ) -> Vec<OverrideWarning> {
			self.warnings.lock().unwrap().clone()
		}

	}

	impl WarningSink for CollectSink {
		fn warn( &mut self, warning: &OverrideWarning ) {
			self.warnings.lock().unwrap().push( warning.clone() );
		}
	}

	/// A widget host searching `TestApp::Widget` then `TestApp::Base`, with
	/// base methods `foo` and `bar`.
	pub fn widget_host() -> PluggableHost {
		let mut host = PluggableHost::new(
			WIDGET_TYPE,
			[ ModuleId::new( WIDGET_TYPE ), ModuleId::new( BASE_TYPE ) ],
		);
		host.define_method( "foo", | _attributes, _arguments | Value::str( "original foo" ));
		host.define_method( "bar", | _attributes, _arguments | Value::str( "original bar" ));
		host
	}

	/// Same host, with warnings collected instead of logged.
	pub fn widget_host_with_sink( sink: CollectSink ) -> PluggableHost {
		let mut host = PluggableHost::new(
			WIDGET_TYPE,
			[ ModuleId::new( WIDGET_TYPE ), ModuleId::new( BASE_TYPE ) ],
		)
			.with_warning_sink( sink );
		host.define_method( "foo", | _attributes, _arguments | Value::str( "original foo" ));
		host.define_method( "bar", | _attributes, _arguments | Value::str( "original bar" ));
		host
	}

	/// Three plugins and the extensions between them:
	///
	/// - `Bar` overrides the base `bar`.
	/// - `Baz` adds a `baz` method, and patches `bar` when `Bar` is loaded.
	/// - `Foo` wraps the base `foo`, and patches both `bar` and `baz`.
	pub fn scenario_environment() -> MemoryEnvironment {
		let mut environment = MemoryEnvironment::new();
		environment
			.install_role(
				"TestApp::Widget::Plugin::Bar",
				Role::new().override_method( "bar", | _attributes, _arguments | {
					Value::str( "override bar" )
				}),
			)
			.install_role(
				"TestApp::Widget::Plugin::Baz",
				Role::new().method( "baz", | _attributes, _arguments | {
					Value::str( "plugin baz" )
				}),
			)
			.install_role(
				"TestApp::Widget::Plugin::Baz::ExtensionFor::Bar",
				Role::new().wrap( "bar", | attributes, next, arguments | {
					Value::str( format!( "baz'd bar  {}", next.call( attributes, arguments )))
				}),
			)
			.install_role(
				"TestApp::Widget::Plugin::Foo",
				Role::new().wrap( "foo", | attributes, next, arguments | {
					Value::str( format!( "around foo  {}", next.call( attributes, arguments )))
				}),
			)
			.install_role(
				"TestApp::Widget::Plugin::Foo::ExtensionFor::Bar",
				Role::new().wrap( "bar", | attributes, next, arguments | {
					Value::str( format!( "foo'd bar  {}", next.call( attributes, arguments )))
				}),
			)
			.install_role(
				"TestApp::Widget::Plugin::Foo::ExtensionFor::Baz",
				Role::new().wrap( "baz", | attributes, next, arguments | {
					Value::str( format!( "foo'd baz  {}", next.call( attributes, arguments )))
				}),
			);
		environment
	}

	/// Appends a tag to the space-separated `trail` attribute.
	pub fn record_trail( attributes: &mut Attributes, tag: &str ) {
		let trail = attributes
			.entry( "trail".to_string() )
			.or_insert_with(|| Value::str( "" ));
		if let Value::Str( trail ) = trail {
			if !trail.is_empty() { trail.push( ' ' ) }
			trail.push_str( tag );
		}
	}

}
