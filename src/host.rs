//! The pluggable-object facade.
//!
//! [`PluggableHost`] ties the pieces together for one live instance: the
//! identity anchor captured at construction, the plugin-namespace prefix and
//! ancestry-ordered search namespaces that drive resolution, the lazily built
//! locator cache, the per-instance plugin registry, and the composed
//! [`Behavior`]. The module environment is injected into each load call
//! rather than owned: the host knows *what* was composed, never *where*
//! modules come from.

use crate::compose ;
use crate::compose::{ Behavior, LogSink, WarningSink };
use crate::environment::{ ModuleDiscovery, ModuleLoader };
use crate::error::PluginError ;
use crate::extension ;
use crate::locator::Locator ;
use crate::method::{ Attributes, DispatchError };
use crate::module_id::{ ModuleId, DEFAULT_PLUGIN_NAMESPACE };
use crate::registry::PluginRegistry ;
use crate::resolver ;
use crate::resolver::Resolved ;
use crate::value::Value ;

/// A live object instance that can acquire plugins at runtime.
///
/// One host models one pluggable instance: two hosts of the same original
/// type may carry entirely different capabilities. Loading is single-threaded
/// and non-reentrant per host; callers in threaded environments must
/// serialize access to `load_plugins` per instance.
pub struct PluggableHost {
	/// Original concrete type name, captured once, immutable thereafter.
	identity_anchor: String,
	plugin_namespace_prefix: String,
	/// Most-specific-first namespace roots: discovery path and precedence order.
	search_namespaces: Vec<ModuleId>,
	registry: PluginRegistry,
	/// Lazily built; `None` after any change to the search configuration.
	locator: Option<Locator>,
	behavior: Behavior,
	warning_sink: Box<dyn WarningSink + Send>,
}

impl PluggableHost {

	/// Creates a host with no plugins loaded.
	///
	/// `identity` is the original concrete type name; it anchors the
	/// instance's identity across all later composition. `search_namespaces`
	/// is the ancestry-ordered namespace list, most specific first; the host
	/// type system supplies it explicitly rather than being introspected.
	/// The plugin-namespace prefix defaults to
	/// [`DEFAULT_PLUGIN_NAMESPACE`] and warnings default to [`LogSink`].
	pub fn new(
		identity: impl Into<String>,
		search_namespaces: impl IntoIterator<Item = ModuleId>,
	) -> Self {
		Self {
			identity_anchor: identity.into(),
			plugin_namespace_prefix: DEFAULT_PLUGIN_NAMESPACE.to_string(),
			search_namespaces: search_namespaces.into_iter().collect(),
			registry: PluginRegistry::new(),
			locator: None,
			behavior: Behavior::new(),
			warning_sink: Box::new( LogSink ),
		}
	}

	/// Sets the plugin-namespace prefix used when expanding short names.
	pub fn with_namespace_prefix( mut self, prefix: impl Into<String> ) -> Self {
		self.plugin_namespace_prefix = prefix.into();
		self
	}

	/// Replaces the warning sink.
	pub fn with_warning_sink( mut self, sink: impl WarningSink + Send + 'static ) -> Self {
		self.warning_sink = Box::new( sink );
		self
	}

	/// The original concrete type name.
	///
	/// Stays stable and queryable no matter how much composition has altered
	/// the instance's effective runtime identity.
	pub fn identity_anchor( &self ) -> &str {
		&self.identity_anchor
	}

	/// The plugin-namespace prefix.
	pub fn plugin_namespace_prefix( &self ) -> &str {
		&self.plugin_namespace_prefix
	}

	/// Changes the plugin-namespace prefix. Invalidates the locator cache.
	pub fn set_plugin_namespace_prefix( &mut self, prefix: impl Into<String> ) {
		self.plugin_namespace_prefix = prefix.into();
		self.locator = None ;
	}

	/// The search namespaces, most specific first.
	pub fn search_namespaces( &self ) -> &[ModuleId] {
		&self.search_namespaces
	}

	/// Replaces the search namespaces. Invalidates the locator cache.
	pub fn set_search_namespaces( &mut self, namespaces: impl IntoIterator<Item = ModuleId> ) {
		self.search_namespaces = namespaces.into_iter().collect();
		self.locator = None ;
	}

	/// Drops the cached module enumeration.
	///
	/// Call after installing modules into the environment mid-flight so the
	/// next resolution sees them.
	pub fn invalidate_module_cache( &mut self ) {
		self.locator = None ;
	}

	/// Whether a plugin was loaded under this short name.
	pub fn is_loaded( &self, name: &str ) -> bool {
		self.registry.is_loaded( name )
	}

	/// The module a short name resolved to, if loaded.
	pub fn resolved_module_of( &self, name: &str ) -> Option<&ModuleId> {
		self.registry.resolved_module_of( name )
	}

	/// All loaded `( short name, resolved module )` pairs, in load order.
	pub fn loaded_plugins( &self ) -> impl Iterator<Item = ( &str, &ModuleId )> {
		self.registry.iter()
	}

	/// Whether the given module has been composed onto this instance.
	pub fn does( &self, module: &ModuleId ) -> bool {
		self.behavior.does( module )
	}

	/// Every composed module, in application order.
	pub fn composed_modules( &self ) -> &[ModuleId] {
		self.behavior.composed_modules()
	}

	/// Defines a base method, added only if absent.
	pub fn define_method(
		&mut self,
		method: &str,
		body: impl Fn( &mut Attributes, &[Value] ) -> Value + Send + Sync + 'static,
	) -> bool {
		self.behavior.define_method( method, body )
	}

	/// Whether a method with this name exists on the instance.
	pub fn has_method( &self, method: &str ) -> bool {
		self.behavior.has_method( method )
	}

	/// Invokes a method's full composed call path.
	pub fn call( &mut self, method: &str, arguments: &[Value] ) -> Result<Value, DispatchError> {
		self.behavior.call( method, arguments )
	}

	/// Reads an attribute.
	pub fn attribute( &self, name: &str ) -> Option<&Value> {
		self.behavior.attribute( name )
	}

	/// Writes an attribute unconditionally.
	pub fn set_attribute( &mut self, name: impl Into<String>, value: Value ) {
		self.behavior.set_attribute( name, value );
	}

	/// Single-name convenience form of [`PluggableHost::load_plugins`].
	pub fn load_plugin<E>( &mut self, environment: &mut E, name: &str ) -> Result<(), PluginError>
	where
		E: ModuleLoader + ModuleDiscovery,
	{
		self.load_plugins( environment, &[ name ])
	}

	/// Resolves, applies, and records each named plugin, in order.
	///
	/// Already-loaded names are silently skipped. After each successful
	/// application the plugin is recorded and its extensions are discovered
	/// and applied. On the first failure the rest of the batch is abandoned
	/// and the error returned, but everything applied earlier in this call
	/// and in prior calls stays in effect. Composition onto a live instance
	/// is never rolled back.
	///
	/// # Errors
	/// [`PluginError::EmptyPluginList`] for an empty `names`; otherwise the
	/// first resolution, load, or apply failure encountered.
	pub fn load_plugins<E>(
		&mut self,
		environment: &mut E,
		names: &[&str],
	) -> Result<(), PluginError>
	where
		E: ModuleLoader + ModuleDiscovery,
	{

		if names.is_empty() { return Err( PluginError::EmptyPluginList ) }

		for name in names {
			if self.registry.is_loaded( name ) { continue }

			let Resolved { module, explicit } = match resolver::explicit_name( name ) {
				// Explicit names never touch discovery, so the locator stays unbuilt.
				Some( module ) => Resolved { module, explicit: true },
				None => {
					let locator = match self.locator.take() {
						Some( locator ) => locator,
						None => Locator::build(
							&*environment,
							&self.search_namespaces,
							&self.plugin_namespace_prefix,
						),
					};
					let resolved = resolver::resolve(
						name,
						&self.plugin_namespace_prefix,
						&self.search_namespaces,
						&locator,
					);
					self.locator = Some( locator );
					resolved?
				}
			};

			compose::apply( &mut self.behavior, environment, self.warning_sink.as_mut(), &module )?;
			self.registry.record( name, module );
			extension::discover_and_apply(
				&mut self.behavior,
				&self.registry,
				environment,
				self.warning_sink.as_mut(),
				name,
				explicit,
			)?;
		}

		Ok(())

	}

}

impl std::fmt::Debug for PluggableHost {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "PluggableHost" )
			.field( "identity_anchor", &self.identity_anchor )
			.field( "plugin_namespace_prefix", &self.plugin_namespace_prefix )
			.field( "search_namespaces", &self.search_namespaces )
			.field( "registry", &self.registry )
			.field( "behavior", &self.behavior )
			.field( "warning_sink", &"<sink>" )
			.finish()
	}
}
