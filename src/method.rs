//! The layered method model.
//!
//! Each logical method on a host is an explicit chain-of-responsibility: a
//! body at the centre, a stack of [`Wrapper`] layers around it, and queues of
//! [`Hook`]s that run strictly before and after the wrapped body. Composition
//! is additive: applying a bundle pushes new layers and hooks without ever
//! detaching what earlier bundles contributed.
//!
//! Ordering rules:
//!
//! - **Wrap** layers nest outermost-last-applied: the most recently added
//! 	wrapper runs first and decides whether and when to invoke the next
//! 	layer down through its [`Next`] handle.
//! - **Before** hooks run most-recent-first, **after** hooks most-recent-last,
//! 	always outside the wrap stack.

use std::collections::HashMap ;
use std::sync::Arc ;

use thiserror::Error ;

use crate::value::Value ;

/// Per-instance attribute storage, shared by every method on a host.
pub type Attributes = HashMap<String, Value> ;

/// A method body: innermost callable of a chain.
pub type Method = Arc<dyn Fn( &mut Attributes, &[Value] ) -> Value + Send + Sync> ;

/// A before/after hook. Runs for effect; its return is discarded.
pub type Hook = Arc<dyn Fn( &mut Attributes, &[Value] ) + Send + Sync> ;

/// A wrap layer. Receives a [`Next`] handle to invoke the layer below it,
/// and may short-circuit by not calling it.
pub type Wrapper =
	Arc<dyn for<'n> Fn( &mut Attributes, Next<'n>, &[Value] ) -> Value + Send + Sync> ;

/// Errors that can occur when dispatching a method call on a host.
#[derive( Error, Debug )]
pub enum DispatchError {
	/// No method with this name exists on the host.
	#[error( "unknown method: {0}" )] UnknownMethod( String ),
}

/// A handle to the remaining inner layers of a method chain.
///
/// A [`Wrapper`] calls [`Next::call`] to continue down the chain; the
/// innermost call runs the method body itself.
#[derive( Clone, Copy )]
pub struct Next<'a> {
	layers: &'a [Wrapper],
	body: &'a Method,
}

impl Next<'_> {
	/// Invokes the next layer down, or the body if no layers remain.
	pub fn call( &self, attributes: &mut Attributes, arguments: &[Value] ) -> Value {
		match self.layers.split_last() {
			Some(( outer, inner )) => outer(
				attributes,
				Next { layers: inner, body: self.body },
				arguments,
			),
			None => ( self.body )( attributes, arguments ),
		}
	}
}

/// One method's composed call path.
struct MethodChain {
	body: Method,
	/// Wrap layers in application order; the last entry is outermost.
	layers: Vec<Wrapper>,
	before: Vec<Hook>,
	after: Vec<Hook>,
}

impl MethodChain {

	fn new( body: Method ) -> Self {
		Self {
			body,
			layers: Vec::with_capacity( 0 ),
			before: Vec::with_capacity( 0 ),
			after: Vec::with_capacity( 0 ),
		}
	}

	fn invoke( &self, attributes: &mut Attributes, arguments: &[Value] ) -> Value {
		for hook in self.before.iter().rev() { hook( attributes, arguments ) }
		let value = Next { layers: &self.layers, body: &self.body }
			.call( attributes, arguments );
		for hook in &self.after { hook( attributes, arguments ) }
		value
	}

}

/// The set of composed methods on one host instance.
#[derive( Default )]
pub struct MethodTable {
	chains: HashMap<String, MethodChain>,
}

impl MethodTable {

	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether a method with this name exists.
	pub fn contains( &self, method: &str ) -> bool {
		self.chains.contains_key( method )
	}

	/// The names of all defined methods, in no particular order.
	pub fn method_names( &self ) -> impl Iterator<Item = &str> {
		self.chains.keys().map( String::as_str )
	}

	/// Adds a method if absent. Returns whether the method was added;
	/// an existing chain is left untouched.
	pub fn define( &mut self, method: &str, body: Method ) -> bool {
		match self.chains.contains_key( method ) {
			true => false,
			false => {
				self.chains.insert( method.to_string(), MethodChain::new( body ));
				true
			}
		}
	}

	/// Replaces the body of a method, creating the chain if absent.
	///
	/// Existing wrap layers and hooks stay attached around the new body.
	pub(crate) fn replace_body( &mut self, method: &str, body: Method ) {
		match self.chains.get_mut( method ) {
			Some( chain ) => chain.body = body,
			None => { self.chains.insert( method.to_string(), MethodChain::new( body )); }
		}
	}

	/// Pushes a wrap layer; it becomes the new outermost layer.
	pub(crate) fn push_wrap( &mut self, method: &str, wrapper: Wrapper ) -> Result<(), String> {
		self.chain_mut( method )?.layers.push( wrapper );
		Ok(())
	}

	/// Enqueues a before hook.
	pub(crate) fn push_before( &mut self, method: &str, hook: Hook ) -> Result<(), String> {
		self.chain_mut( method )?.before.push( hook );
		Ok(())
	}

	/// Enqueues an after hook.
	pub(crate) fn push_after( &mut self, method: &str, hook: Hook ) -> Result<(), String> {
		self.chain_mut( method )?.after.push( hook );
		Ok(())
	}

	/// Invokes a method's full composed call path.
	pub fn invoke(
		&self,
		attributes: &mut Attributes,
		method: &str,
		arguments: &[Value],
	) -> Result<Value, DispatchError> {
		self.chains
			.get( method )
			.ok_or_else(|| DispatchError::UnknownMethod( method.to_string() ))
			.map(| chain | chain.invoke( attributes, arguments ))
	}

	fn chain_mut( &mut self, method: &str ) -> Result<&mut MethodChain, String> {
		self.chains.get_mut( method ).ok_or_else(|| method.to_string() )
	}

}

impl std::fmt::Debug for MethodTable {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		let mut methods = f.debug_map();
		for ( name, chain ) in &self.chains {
			methods.entry( name, &format_args!(
				"{} wrap, {} before, {} after",
				chain.layers.len(), chain.before.len(), chain.after.len(),
			));
		}
		methods.finish()
	}
}
