//! Module environment capabilities.
//!
//! The core never touches a filesystem or package index itself. Loading and
//! discovery are narrow external contracts: [`ModuleLoader`] brings a named
//! module into the running process exactly once; [`ModuleDiscovery`] reports
//! which module identifiers are installed under a set of namespace roots,
//! independent of what has been loaded so far.
//!
//! [`MemoryEnvironment`] is a provided in-process implementation backed by a
//! plain map, suitable for tests and for hosts whose module set is assembled
//! statically.

use std::collections::{ HashMap, HashSet };

use thiserror::Error ;

use crate::module_id::ModuleId ;
use crate::role::Role ;

/// Why a module could not be brought into the running process.
#[derive( Error, Debug )]
pub enum LoadCause {
	/// No module with this identifier is installed in the environment.
	#[error( "module is not installed" )] NotInstalled,
	/// The module is installed but failed to initialise.
	#[error( "module failed to initialise: {0}" )] Corrupt( String ),
}

/// What a loaded module turned out to be.
#[derive( Debug, Clone )]
pub enum Artifact {
	/// A composable behavior bundle.
	Role( Role ),
	/// A loaded module of some other kind; it cannot be composed.
	Opaque,
}

/// Capability: load a named module into the running process, idempotently.
pub trait ModuleLoader {
	/// Ensures the module is loaded. Loading twice is a no-op.
	fn ensure_loaded( &mut self, module: &ModuleId ) -> Result<(), LoadCause> ;

	/// The artifact a previously loaded module produced, if any.
	fn loaded_artifact( &self, module: &ModuleId ) -> Option<&Artifact> ;
}

/// Capability: enumerate installed modules under namespace prefixes.
///
/// Implementations must report what is *installed* in the environment, not
/// what happens to be loaded into the process.
pub trait ModuleDiscovery {
	/// All installed module identifiers equal to or below any of the roots.
	fn modules_under( &self, roots: &[ModuleId] ) -> HashSet<ModuleId> ;

	/// Point lookup: whether this exact module is installed.
	///
	/// The default lists only under the module's parent, so a single check
	/// doesn't force a full re-enumeration.
	fn exists( &self, module: &ModuleId ) -> bool {
		match module.parent() {
			Some( parent ) =>
				self.modules_under( std::slice::from_ref( &parent )).contains( module ),
			None => false,
		}
	}
}

/// What `MemoryEnvironment` hands out when a module is loaded.
#[derive( Debug, Clone )]
enum Installed {
	Role( Role ),
	Opaque,
	Broken( String ),
}

/// An in-memory module environment.
///
/// Modules are installed up front; loading moves them into the loaded set
/// (or fails, for modules installed as broken). The environment counts how
/// many times each module was actually brought into the process, which tests
/// use to assert load idempotency.
#[derive( Debug, Default )]
pub struct MemoryEnvironment {
	installed: HashMap<ModuleId, Installed>,
	loaded: HashMap<ModuleId, Artifact>,
	load_counts: HashMap<ModuleId, usize>,
}

impl MemoryEnvironment {

	/// Creates an empty environment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Installs a role module.
	pub fn install_role( &mut self, module: impl Into<ModuleId>, role: Role ) -> &mut Self {
		self.installed.insert( module.into(), Installed::Role( role ));
		self
	}

	/// Installs a module that loads fine but is not a composable role.
	pub fn install_opaque( &mut self, module: impl Into<ModuleId> ) -> &mut Self {
		self.installed.insert( module.into(), Installed::Opaque );
		self
	}

	/// Installs a module that exists but fails to load.
	pub fn install_broken(
		&mut self,
		module: impl Into<ModuleId>,
		message: impl Into<String>,
	) -> &mut Self {
		self.installed.insert( module.into(), Installed::Broken( message.into() ));
		self
	}

	/// How many times the module was actually loaded (0 if never).
	pub fn load_count( &self, module: &ModuleId ) -> usize {
		self.load_counts.get( module ).copied().unwrap_or( 0 )
	}

}

impl ModuleLoader for MemoryEnvironment {

	fn ensure_loaded( &mut self, module: &ModuleId ) -> Result<(), LoadCause> {
		if self.loaded.contains_key( module ) { return Ok(()) }
		let artifact = match self.installed.get( module ) {
			Some( Installed::Role( role )) => Artifact::Role( role.clone() ),
			Some( Installed::Opaque ) => Artifact::Opaque,
			Some( Installed::Broken( message )) =>
				return Err( LoadCause::Corrupt( message.clone() )),
			None => return Err( LoadCause::NotInstalled ),
		};
		self.loaded.insert( module.clone(), artifact );
		*self.load_counts.entry( module.clone() ).or_insert( 0 ) += 1 ;
		Ok(())
	}

	fn loaded_artifact( &self, module: &ModuleId ) -> Option<&Artifact> {
		self.loaded.get( module )
	}

}

impl ModuleDiscovery for MemoryEnvironment {
	fn modules_under( &self, roots: &[ModuleId] ) -> HashSet<ModuleId> {
		self.installed
			.keys()
			.filter(| module | roots.iter().any(| root | module.is_under( root )))
			.cloned()
			.collect()
	}
}
