//! A runtime role-composition engine for building per-instance pluggable objects.
//!
//! Plugins are small, named behavior bundles ( [`Role`]s ) that a live
//! [`PluggableHost`] acquires after construction. One instance of a type can
//! carry different capabilities than another instance of the same type:
//! `role_link` resolves short plugin names through namespace precedence,
//! composes each bundle's method modifications onto the instance without ever
//! replacing what earlier bundles contributed, and automatically applies
//! "extension" bundles that patch the interaction between two loaded plugins.
//!
//! # Core Concepts
//!
//! - [`ModuleId`]: A fully-qualified, `::`-delimited module identifier. Plugin
//! 	modules live at `root::Plugin::Name`; extension modules at
//! 	`plugin-module::ExtensionFor::Name`.
//!
//! - [`Role`]: A composable behavior bundle - an ordered list of method and
//! 	attribute modifications ( method, override, wrap, before, after,
//! 	attribute ). Wrap layers nest outermost-last-applied; before hooks run
//! 	most-recent-first; after hooks most-recent-last.
//!
//! - [`PluggableHost`]: One live pluggable instance. Holds the identity
//! 	anchor (the original type name, stable across all composition), the
//! 	plugin-namespace prefix, the ancestry-ordered search namespaces, the
//! 	registry of loaded plugins, and the composed behavior itself.
//!
//! - [`ModuleLoader`] / [`ModuleDiscovery`]: The external module environment.
//! 	`role_link` never touches a filesystem or package index itself; it asks
//! 	the environment to load a module idempotently and to enumerate what is
//! 	installed under namespace roots. [`MemoryEnvironment`] is a provided
//! 	in-process implementation.
//!
//! - **Search namespaces** double as the discovery path and the precedence
//! 	order: when a short name matches modules under several roots, the first
//! 	root in the list wins, so a derived namespace safely overrides a plugin
//! 	inherited from a base namespace.
//!
//! # Example
//!
//! ```
//! use role_link::{ MemoryEnvironment, ModuleId, PluggableHost, Role, Value };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // The module environment is external to the engine. Here everything is
//! // assembled in memory; a real host application would back these traits
//! // with its module index.
//! let mut environment = MemoryEnvironment::new();
//! environment.install_role(
//! 	"MyApp::Widget::Plugin::Shout",
//! 	Role::new().wrap( "greet", | attrs, next, args | {
//! 		Value::str( next.call( attrs, args ).to_string().to_uppercase() )
//! 	}),
//! );
//!
//! // The host captures its original type name and its ancestry-ordered
//! // search namespaces at construction; both drive name resolution.
//! let mut widget = PluggableHost::new(
//! 	"MyApp::Widget",
//! 	[ ModuleId::new( "MyApp::Widget" ), ModuleId::new( "MyApp" ) ],
//! );
//! widget.define_method( "greet", | _attrs, _args | Value::str( "hello" ));
//!
//! // Short names expand through the plugin namespace: "Shout" resolves to
//! // MyApp::Widget::Plugin::Shout and its modifications are composed on.
//! widget.load_plugin( &mut environment, "Shout" )?;
//!
//! assert_eq!( widget.call( "greet", &[] )?.to_string(), "HELLO" );
//! assert!( widget.is_loaded( "Shout" ));
//! assert_eq!( widget.identity_anchor(), "MyApp::Widget" );
//! # Ok(())
//! # }
//! ```
//!
//! # Layered Composition
//!
//! Applying a bundle never discards earlier modifications. A second plugin
//! wrapping the same method becomes the new outermost layer; calls run the
//! newest wrapper first, which decides whether and when to invoke the layer
//! below through its [`Next`] handle, down to the original body.
//!
//! ```
//! # use role_link::{ MemoryEnvironment, ModuleId, PluggableHost, Role, Value };
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut environment = MemoryEnvironment::new();
//! environment.install_role(
//! 	"App::Plugin::First",
//! 	Role::new().wrap( "m", | attrs, next, args | {
//! 		Value::str( format!( "first( {} )", next.call( attrs, args )))
//! 	}),
//! );
//! environment.install_role(
//! 	"App::Plugin::Second",
//! 	Role::new().wrap( "m", | attrs, next, args | {
//! 		Value::str( format!( "second( {} )", next.call( attrs, args )))
//! 	}),
//! );
//!
//! let mut host = PluggableHost::new( "App", [ ModuleId::new( "App" ) ]);
//! host.define_method( "m", | _attrs, _args | Value::str( "body" ));
//! host.load_plugins( &mut environment, &[ "First", "Second" ])?;
//!
//! // Outermost-last-applied: Second runs first and wraps First.
//! assert_eq!( host.call( "m", &[] )?.to_string(), "second( first( body ) )" );
//! # Ok(())
//! # }
//! ```
//!
//! # Extensions
//!
//! An extension module `A-module::ExtensionFor::B` declares that plugin `A`
//! patches its interaction with plugin `B`. After every successful plugin
//! load, the engine pairs the new plugin with every loaded plugin (itself
//! included) and applies each extension that exists - no explicit call
//! needed, and no error when none exist.
//!
//! ```
//! # use role_link::{ MemoryEnvironment, ModuleId, PluggableHost, Role, Value };
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut environment = MemoryEnvironment::new();
//! environment.install_role(
//! 	"App::Plugin::Greeter",
//! 	Role::new().method( "greet", | _attrs, _args | Value::str( "hi" )),
//! );
//! environment.install_role(
//! 	"App::Plugin::Polite",
//! 	Role::new().method( "excuse", | _attrs, _args | Value::str( "pardon" )),
//! );
//! // Polite patches how it interacts with Greeter.
//! environment.install_role(
//! 	"App::Plugin::Polite::ExtensionFor::Greeter",
//! 	Role::new().wrap( "greet", | attrs, next, args | {
//! 		Value::str( format!( "{}, so sorry", next.call( attrs, args )))
//! 	}),
//! );
//!
//! let mut host = PluggableHost::new( "App", [ ModuleId::new( "App" ) ]);
//! host.load_plugin( &mut environment, "Greeter" )?;
//! assert_eq!( host.call( "greet", &[] )?.to_string(), "hi" );
//!
//! // Loading Polite fires its extension for the already-loaded Greeter.
//! host.load_plugin( &mut environment, "Polite" )?;
//! assert_eq!( host.call( "greet", &[] )?.to_string(), "hi, so sorry" );
//! # Ok(())
//! # }
//! ```
//!
//! # Explicit Names
//!
//! A name beginning with `+` is taken as a fully-qualified module path: the
//! marker is stripped and the rest passes through with no discovery lookup.
//! Extensions of an explicitly named plugin are loaded best-effort, since
//! their existence can't be pre-checked against the search path.
//!
//! # Warnings and Failures
//!
//! A bundle that *replaces* a method body ( [`Role::override_method`] )
//! instead of wrapping it raises a non-fatal [`OverrideWarning`] through the
//! host's [`WarningSink`] - the default [`LogSink`] forwards to `tracing` -
//! and application proceeds. Fatal conditions ( [`PluginError`] ) abort the
//! current batch at the failing name, but nothing already applied is rolled
//! back: composition onto a live instance is monotonic by design.

mod compose ;
mod environment ;
mod error ;
mod extension ;
mod host ;
mod locator ;
mod method ;
mod module_id ;
mod registry ;
mod resolver ;
mod role ;
mod value ;

pub use compose::{ Behavior, LogSink, OverrideWarning, WarningSink };
pub use environment::{ Artifact, LoadCause, MemoryEnvironment, ModuleDiscovery, ModuleLoader };
pub use error::{ ApplyCause, PluginError };
pub use host::PluggableHost ;
pub use locator::Locator ;
pub use method::{ Attributes, DispatchError, Hook, Method, MethodTable, Next, Wrapper };
pub use module_id::{
	ModuleId, DEFAULT_PLUGIN_NAMESPACE, DELIMITER, EXTENSION_SEGMENT,
};
pub use registry::PluginRegistry ;
pub use resolver::{ explicit_name, resolve, Resolved, EXPLICIT_MARKER };
pub use role::{ Modification, Role };
pub use value::Value ;
