//! Plain data passed to and returned from composed methods.

use std::fmt ;

/// A dynamically typed value crossing the method-dispatch boundary.
///
/// Composed methods receive arguments and produce results as `Value`s so that
/// independently authored bundles agree on a common calling convention
/// without sharing concrete types.
#[derive( Debug, Clone, PartialEq, Default )]
pub enum Value {
	/// No data.
	#[default] Unit,
	/// A boolean.
	Bool( bool ),
	/// A signed integer.
	Int( i64 ),
	/// A floating-point number.
	Float( f64 ),
	/// A string.
	Str( String ),
	/// An ordered list of values.
	List( Vec<Value> ),
}

impl Value {

	/// Shorthand for `Value::Str`.
	#[inline]
	pub fn str( value: impl Into<String> ) -> Self {
		Self::Str( value.into() )
	}

	/// The contained string, if this is a `Str`.
	pub fn as_str( &self ) -> Option<&str> {
		match self {
			Self::Str( value ) => Some( value ),
			_ => None,
		}
	}

	/// The contained integer, if this is an `Int`.
	pub fn as_int( &self ) -> Option<i64> {
		match self {
			Self::Int( value ) => Some( *value ),
			_ => None,
		}
	}

	/// Whether this is `Unit`.
	pub fn is_unit( &self ) -> bool {
		matches!( self, Self::Unit )
	}

}

impl fmt::Display for Value {
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result {
		match self {
			Self::Unit => Ok(()),
			Self::Bool( value ) => write!( f, "{}", value ),
			Self::Int( value ) => write!( f, "{}", value ),
			Self::Float( value ) => write!( f, "{}", value ),
			Self::Str( value ) => f.write_str( value ),
			Self::List( values ) => {
				for ( index, value ) in values.iter().enumerate() {
					if index > 0 { f.write_str( " " )? }
					write!( f, "{}", value )?;
				}
				Ok(())
			}
		}
	}
}

impl From<&str> for Value {
	fn from( value: &str ) -> Self { Self::Str( value.to_string() ) }
}

impl From<String> for Value {
	fn from( value: String ) -> Self { Self::Str( value ) }
}

impl From<i64> for Value {
	fn from( value: i64 ) -> Self { Self::Int( value ) }
}

impl From<bool> for Value {
	fn from( value: bool ) -> Self { Self::Bool( value ) }
}
