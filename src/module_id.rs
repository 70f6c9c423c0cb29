//! Module identifier types.
//!
//! A [`ModuleId`] is a fully-qualified, hierarchical name for a behavior
//! bundle: segments joined by [`DELIMITER`]. Two flavors exist by convention:
//! plugin modules ( `root::Plugin::Name` ) and extension modules
//! ( `plugin-module::ExtensionFor::Name` ), the latter declaring that the
//! bundle patches the interaction between the plugin it is nested under and
//! the plugin named by its final segment.

use std::fmt ;

/// Segment separator in module identifiers.
pub const DELIMITER: &str = "::" ;

/// Namespace segment under which extension modules live.
pub const EXTENSION_SEGMENT: &str = "ExtensionFor" ;

/// Default namespace segment under which plugin modules live.
pub const DEFAULT_PLUGIN_NAMESPACE: &str = "Plugin" ;

/// A fully-qualified, hierarchical module name.
///
/// `ModuleId` is a thin wrapper over the delimiter-joined path string. It
/// performs no validation; resolution and discovery decide whether an id
/// denotes anything real.
#[derive( Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord )]
pub struct ModuleId( String );

impl ModuleId {

	/// Creates an id from a delimiter-joined path string.
	#[inline]
	pub fn new( path: impl Into<String> ) -> Self {
		Self( path.into() )
	}

	/// The full path string.
	#[inline] pub fn as_str( &self ) -> &str { &self.0 }

	/// Appends one or more segments ( `self::suffix` ).
	///
	/// The suffix may itself contain the delimiter.
	pub fn join( &self, suffix: &str ) -> Self {
		Self( format!( "{}{}{}", self.0, DELIMITER, suffix ))
	}

	/// The id with its final segment removed, or `None` for a single-segment id.
	pub fn parent( &self ) -> Option<Self> {
		self.0.rsplit_once( DELIMITER ).map(|( head, _ )| Self( head.to_string() ))
	}

	/// The final segment of the path.
	pub fn last_segment( &self ) -> &str {
		self.0.rsplit_once( DELIMITER ).map_or( self.0.as_str(), |( _, tail )| tail )
	}

	/// The segments of the path, in order.
	pub fn segments( &self ) -> impl Iterator<Item = &str> {
		self.0.split( DELIMITER )
	}

	/// Whether the id ends with `suffix` at a segment boundary.
	///
	/// An id equal to `suffix` matches too.
	pub fn has_suffix( &self, suffix: &str ) -> bool {
		self.0 == suffix
			|| self.0.ends_with( suffix )
				&& self.0[ ..self.0.len() - suffix.len() ].ends_with( DELIMITER )
	}

	/// Whether the id equals `root` or sits below it in the hierarchy.
	pub fn is_under( &self, root: &ModuleId ) -> bool {
		self.0 == root.0
			|| self.0.starts_with( root.0.as_str() )
				&& self.0[ root.0.len().. ].starts_with( DELIMITER )
	}

	/// The extension-module id this plugin module would declare for a plugin
	/// with the given short name: `self::ExtensionFor::name`.
	pub fn extension_for( &self, name: &str ) -> Self {
		self.join( EXTENSION_SEGMENT ).join( name )
	}

}

impl fmt::Display for ModuleId {
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result {
		f.write_str( &self.0 )
	}
}

impl From<&str> for ModuleId {
	fn from( path: &str ) -> Self { Self::new( path ) }
}

impl From<String> for ModuleId {
	fn from( path: String ) -> Self { Self::new( path ) }
}
