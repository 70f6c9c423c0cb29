//! Composable behavior bundles.
//!
//! A [`Role`] is the artifact kind a module must resolve to before it can be
//! composed onto a host: an ordered list of method and attribute
//! modifications. Roles declare *what* to merge; the merge rules themselves
//! live in [`crate::compose`].

use std::sync::Arc ;

use nonempty_collections::NEVec ;

use crate::method::{ Attributes, Hook, Method, Next, Wrapper };
use crate::value::Value ;

/// A single declared effect of a role.
#[derive( Clone )]
pub enum Modification {
	/// Adds a method if the host doesn't already have one by this name.
	Method { method: String, body: Method },
	/// Replaces a method body outright, creating the method if absent.
	///
	/// Discouraged: replacement sidesteps the layered-composition model, so
	/// applying a role that declares one raises a non-fatal warning.
	Override { method: String, body: Method },
	/// Wraps an existing method; becomes the new outermost layer.
	Wrap { method: String, wrapper: Wrapper },
	/// Runs before an existing method's wrapped body.
	Before { method: String, hook: Hook },
	/// Runs after an existing method's wrapped body.
	After { method: String, hook: Hook },
	/// Adds an attribute if the host doesn't already have one by this name.
	Attribute { name: String, value: Value },
}

impl Modification {
	fn kind_and_target( &self ) -> ( &'static str, &str ) {
		match self {
			Self::Method { method, .. } => ( "method", method ),
			Self::Override { method, .. } => ( "override", method ),
			Self::Wrap { method, .. } => ( "wrap", method ),
			Self::Before { method, .. } => ( "before", method ),
			Self::After { method, .. } => ( "after", method ),
			Self::Attribute { name, .. } => ( "attribute", name ),
		}
	}
}

impl std::fmt::Debug for Modification {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		let ( kind, target ) = self.kind_and_target();
		write!( f, "{} {:?}", kind, target )
	}
}

/// An ordered bundle of method and attribute modifications.
///
/// Built through chainable declaration methods, mirroring how a role is
/// written in source form:
///
/// ```
/// use role_link::{ Role, Value };
///
/// let role = Role::new()
/// 	.method( "greet", | _attrs, _args | Value::str( "hello" ))
/// 	.wrap( "greet", | attrs, next, args | {
/// 		Value::str( format!( "<< {} >>", next.call( attrs, args )))
/// 	})
/// 	.attribute( "greeted", Value::Bool( false ));
/// assert_eq!( role.modifications().len(), 3 );
/// ```
#[derive( Clone, Default )]
pub struct Role {
	modifications: Vec<Modification>,
}

impl Role {

	/// Creates an empty role.
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares a method, added only if the host lacks one by this name.
	pub fn method(
		mut self,
		method: impl Into<String>,
		body: impl Fn( &mut Attributes, &[Value] ) -> Value + Send + Sync + 'static,
	) -> Self {
		self.modifications.push( Modification::Method {
			method: method.into(),
			body: Arc::new( body ),
		});
		self
	}

	/// Declares an override: the method body is replaced outright.
	///
	/// Applying a role with overrides raises a non-fatal warning; prefer
	/// [`Role::wrap`], which keeps previously composed layers on the call path.
	pub fn override_method(
		mut self,
		method: impl Into<String>,
		body: impl Fn( &mut Attributes, &[Value] ) -> Value + Send + Sync + 'static,
	) -> Self {
		self.modifications.push( Modification::Override {
			method: method.into(),
			body: Arc::new( body ),
		});
		self
	}

	/// Declares a wrap layer around an existing method.
	pub fn wrap(
		mut self,
		method: impl Into<String>,
		wrapper: impl for<'n> Fn( &mut Attributes, Next<'n>, &[Value] ) -> Value + Send + Sync + 'static,
	) -> Self {
		self.modifications.push( Modification::Wrap {
			method: method.into(),
			wrapper: Arc::new( wrapper ),
		});
		self
	}

	/// Declares a hook that runs before an existing method.
	pub fn before(
		mut self,
		method: impl Into<String>,
		hook: impl Fn( &mut Attributes, &[Value] ) + Send + Sync + 'static,
	) -> Self {
		self.modifications.push( Modification::Before {
			method: method.into(),
			hook: Arc::new( hook ),
		});
		self
	}

	/// Declares a hook that runs after an existing method.
	pub fn after(
		mut self,
		method: impl Into<String>,
		hook: impl Fn( &mut Attributes, &[Value] ) + Send + Sync + 'static,
	) -> Self {
		self.modifications.push( Modification::After {
			method: method.into(),
			hook: Arc::new( hook ),
		});
		self
	}

	/// Declares an attribute, added only if the host lacks one by this name.
	pub fn attribute( mut self, name: impl Into<String>, value: Value ) -> Self {
		self.modifications.push( Modification::Attribute { name: name.into(), value });
		self
	}

	/// The declared modifications, in declaration order.
	pub fn modifications( &self ) -> &[Modification] {
		&self.modifications
	}

	/// The method names this role declares override modifications for, or
	/// `None` when there are none.
	pub fn overridden_methods( &self ) -> Option<NEVec<String>> {
		let mut methods: Option<NEVec<String>> = None ;
		for modification in &self.modifications {
			if let Modification::Override { method, .. } = modification {
				match &mut methods {
					Some( list ) => list.push( method.clone() ),
					None => methods = Some( NEVec::new( method.clone() )),
				}
			}
		}
		methods
	}

	/// Whether any modification is an override.
	pub fn declares_override( &self ) -> bool {
		self.modifications
			.iter()
			.any(| modification | matches!( modification, Modification::Override { .. } ))
	}

}

impl std::fmt::Debug for Role {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "Role" )
			.field( "modifications", &self.modifications )
			.finish()
	}
}
