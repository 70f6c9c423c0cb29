//! Search-path based module discovery.
//!
//! A [`Locator`] is a cached view over a host's search namespaces: the set of
//! installed module identifiers reachable under `root::prefix` for every
//! namespace root, in root order. The owning host rebuilds it whenever its
//! search namespaces or plugin-namespace prefix change; the cache exists for
//! resolution, while point existence checks go straight to the environment
//! through [`ModuleDiscovery::exists`]( crate::ModuleDiscovery::exists ).

use std::collections::HashSet ;

use itertools::Itertools ;

use crate::environment::ModuleDiscovery ;
use crate::module_id::ModuleId ;

/// A cached enumeration of discoverable plugin modules.
#[derive( Debug, Clone )]
pub struct Locator {
	roots: Vec<ModuleId>,
	index: HashSet<ModuleId>,
}

impl Locator {

	/// Enumerates everything installed under `root::prefix` for each search
	/// namespace, preserving root order.
	pub fn build(
		discovery: &impl ModuleDiscovery,
		search_namespaces: &[ModuleId],
		prefix: &str,
	) -> Self {
		let roots: Vec<ModuleId> = search_namespaces
			.iter()
			.map(| namespace | namespace.join( prefix ))
			.collect();
		let index = discovery.modules_under( &roots );
		Self { roots, index }
	}

	/// The search roots this locator enumerates under, most specific first.
	pub fn roots( &self ) -> &[ModuleId] {
		&self.roots
	}

	/// Every discoverable module identifier.
	pub fn modules( &self ) -> impl Iterator<Item = &ModuleId> {
		self.index.iter()
	}

	/// Whether the cached enumeration contains this exact identifier.
	pub fn contains( &self, module: &ModuleId ) -> bool {
		self.index.contains( module )
	}

	/// All discoverable identifiers ending in `suffix` at a segment boundary,
	/// sorted for deterministic downstream disambiguation.
	pub fn matching_suffix( &self, suffix: &str ) -> Vec<ModuleId> {
		self.index
			.iter()
			.filter(| module | module.has_suffix( suffix ))
			.cloned()
			.sorted()
			.collect()
	}

}
