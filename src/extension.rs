//! Automatic extension discovery.
//!
//! After a plugin is applied and recorded, the engine looks for extension
//! modules patching the interaction between the plugin just loaded and every
//! plugin already in the registry, including the one just loaded, since it
//! was recorded first, so a plugin may declare an extension targeting itself.
//! Iterating all loaded pairs (not just the newest) means an extension fires
//! regardless of which of the two plugins loaded first, as long as both are
//! present once the second arrives.

use crate::compose ;
use crate::compose::{ Behavior, WarningSink };
use crate::environment::{ ModuleDiscovery, ModuleLoader };
use crate::error::PluginError ;
use crate::module_id::ModuleId ;
use crate::registry::PluginRegistry ;

/// Applies every extension the just-loaded plugin declares for a currently
/// loaded plugin.
///
/// For each registry entry, the candidate is
/// `just-loaded-module::ExtensionFor::short-name`, the short name taken
/// verbatim as the caller gave it. Resolver-resolved names gate each
/// candidate on a [`ModuleDiscovery::exists`] check, so a missing extension
/// is skipped without ever being attempted. Explicit ( `+`-marked ) names
/// bypass discovery, so their candidates are loaded best-effort: a load
/// failure is tolerated silently, while an apply failure still propagates.
///
/// # Errors
/// Application failures for an existing extension propagate as for any
/// plugin load. They never unset the just-loaded plugin's own success.
pub(crate) fn discover_and_apply<E>(
	behavior: &mut Behavior,
	registry: &PluginRegistry,
	environment: &mut E,
	sink: &mut dyn WarningSink,
	just_loaded: &str,
	explicit: bool,
) -> Result<(), PluginError>
where
	E: ModuleLoader + ModuleDiscovery,
{

	let Some( base ) = registry.resolved_module_of( just_loaded ).cloned() else {
		return Ok(())
	};

	let candidates: Vec<ModuleId> = registry
		.iter()
		.map(|( name, _ )| base.extension_for( name ))
		.collect();

	for candidate in candidates {
		if explicit {
			// Best effort: the extension may simply not exist.
			match compose::apply( behavior, environment, sink, &candidate ) {
				Err( PluginError::LoadFailure { .. } ) => {}
				outcome => outcome?,
			}
		} else {
			if !environment.exists( &candidate ) { continue }
			tracing::debug!( extension = %candidate, "applying discovered extension" );
			compose::apply( behavior, environment, sink, &candidate )?;
		}
	}

	Ok(())

}
