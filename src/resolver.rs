//! Short-name resolution.
//!
//! Turns a caller-given plugin name into a fully-qualified [`ModuleId`].
//! Names beginning with [`EXPLICIT_MARKER`] bypass discovery entirely: the
//! marker is stripped and the remainder passes through verbatim. Anything
//! else is matched by suffix against the locator's enumeration and
//! disambiguated by search-namespace precedence: the same ordered list
//! drives both discovery and conflict resolution, so a plugin reachable from
//! a more specific namespace always beats one inherited from a more general
//! namespace.

use pipe_trait::Pipe ;

use crate::error::PluginError ;
use crate::locator::Locator ;
use crate::module_id::{ ModuleId, DELIMITER };

/// Prefix marking a plugin name as an explicit fully-qualified module path.
pub const EXPLICIT_MARKER: char = '+' ;

/// The outcome of resolving a plugin name.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct Resolved {
	/// The fully-qualified module the name resolved to.
	pub module: ModuleId,
	/// Whether the name was explicit ( `+`-marked ) and bypassed discovery.
	pub explicit: bool,
}

/// Strips the explicit marker, if present, and returns the rest verbatim.
///
/// No discovery lookup happens for explicit names, and existence is not
/// validated at this stage.
pub fn explicit_name( name: &str ) -> Option<ModuleId> {
	name.strip_prefix( EXPLICIT_MARKER ).map( ModuleId::new )
}

/// Resolves a plugin name against the locator's enumeration.
///
/// Matching is by suffix `prefix::name` at a segment boundary. With several
/// candidates, the first search namespace (in order) whose expected
/// identifier `root::prefix::name` appears among them wins; if none matches
/// exactly ( possible only with irregularly nested installs ), the first
/// candidate in sorted order is taken so resolution stays deterministic.
///
/// # Errors
/// [`PluginError::PluginNotFound`] when no discoverable module matches.
pub fn resolve(
	name: &str,
	prefix: &str,
	search_namespaces: &[ModuleId],
	locator: &Locator,
) -> Result<Resolved, PluginError> {

	if let Some( module ) = explicit_name( name ) {
		return Ok( Resolved { module, explicit: true });
	}

	let pattern = format!( "{}{}{}", prefix, DELIMITER, name );
	let candidates = locator.matching_suffix( &pattern );
	let Some( first ) = candidates.first() else {
		return Err( PluginError::PluginNotFound( name.to_string() ));
	};

	search_namespaces
		.iter()
		.map(| namespace | namespace.join( &pattern ))
		.find(| expected | candidates.contains( expected ))
		.unwrap_or_else(|| first.clone() )
		.pipe(| module | {
			tracing::debug!( plugin = name, module = %module, "resolved plugin name" );
			Ok( Resolved { module, explicit: false })
		})

}
