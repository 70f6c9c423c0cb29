//! Per-host plugin bookkeeping.

use crate::module_id::ModuleId ;

/// The record of which plugins a host has loaded.
///
/// Keys are the short names exactly as the caller gave them, including any
/// explicit-name marker. A name present here was, at some point, successfully
/// resolved and applied; a failed load never leaves a partial record. Entries
/// are never removed, and insertion order is kept so extension discovery
/// iterates deterministically.
#[derive( Debug, Clone, Default )]
pub struct PluginRegistry {
	entries: Vec<( String, ModuleId )>,
}

impl PluginRegistry {

	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether a plugin was loaded under this short name.
	pub fn is_loaded( &self, name: &str ) -> bool {
		self.entries.iter().any(|( entry, _ )| entry.as_str() == name )
	}

	/// The module a short name resolved to, if loaded.
	pub fn resolved_module_of( &self, name: &str ) -> Option<&ModuleId> {
		self.entries
			.iter()
			.find(|( entry, _ )| entry.as_str() == name )
			.map(|( _, module )| module )
	}

	/// Records a successful resolution and application.
	///
	/// Re-recording an existing name is a no-op; the first resolution stands.
	pub(crate) fn record( &mut self, name: &str, module: ModuleId ) {
		if !self.is_loaded( name ) {
			self.entries.push(( name.to_string(), module ));
		}
	}

	/// All `( short name, resolved module )` pairs, in load order.
	pub fn iter( &self ) -> impl Iterator<Item = ( &str, &ModuleId )> {
		self.entries.iter().map(|( name, module )| ( name.as_str(), module ))
	}

	/// How many plugins are loaded.
	pub fn len( &self ) -> usize {
		self.entries.len()
	}

	/// Whether no plugins are loaded.
	pub fn is_empty( &self ) -> bool {
		self.entries.is_empty()
	}

}
