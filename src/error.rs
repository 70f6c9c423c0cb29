//! Fatal error taxonomy for plugin loading.

use thiserror::Error ;

use crate::environment::LoadCause ;
use crate::module_id::ModuleId ;

/// Errors that abort a plugin's load.
///
/// Every variant is fatal to the current `load_plugins` batch at the failing
/// name. Everything successfully applied earlier, in the same batch or in
/// previous calls, stays in effect: composition onto a live instance is
/// monotonic and never rolled back. The override-discouraged warning is *not*
/// part of this taxonomy; it flows through the
/// [`WarningSink`]( crate::WarningSink ) and never fails a load.
#[derive( Error, Debug )]
pub enum PluginError {
	/// A load call was given no plugin names.
	#[error( "no plugin names given" )] EmptyPluginList,
	/// The short name matched no discoverable plugin module.
	#[error( "unable to locate plugin: {0}" )] PluginNotFound( String ),
	/// The resolved module could not be brought into the running process.
	///
	/// Distinct from [`PluginNotFound`]( Self::PluginNotFound ): the module
	/// was expected to exist, but loading it failed.
	#[error( "failed to load module {module}: {cause}" )]
	LoadFailure {
		module: ModuleId,
		#[source] cause: LoadCause,
	},
	/// The module loaded but could not be composed onto the target.
	#[error( "failed to apply module {module}: {cause}" )]
	ApplyFailure {
		module: ModuleId,
		#[source] cause: ApplyCause,
	},
}

/// Why a loaded module could not be composed.
#[derive( Error, Debug )]
pub enum ApplyCause {
	/// The module is not a composable behavior bundle.
	#[error( "module is not a composable role" )] NotARole,
	/// A wrap/before/after modification targeted a method the host lacks.
	#[error( "no method named {0:?} to modify" )] NoSuchMethod( String ),
}
