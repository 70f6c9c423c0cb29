//! The composition engine.
//!
//! [`apply`] takes a resolved module identifier through the full pipeline:
//! ensure the module is loaded, check that it is a composable [`Role`], warn
//! about override-kind modifications, then merge its declarations into the
//! target [`Behavior`]. Merging is additive and order-preserving: nothing a
//! previously applied module contributed is ever discarded or detached.

use nonempty_collections::NEVec ;
use thiserror::Error ;

use crate::environment::{ Artifact, ModuleLoader };
use crate::error::{ ApplyCause, PluginError };
use crate::method::{ Attributes, DispatchError, MethodTable };
use crate::module_id::ModuleId ;
use crate::role::{ Modification, Role };
use crate::value::Value ;

/// Non-fatal notice that a module declares override-kind modifications.
///
/// A module that replaces a method body, rather than wrapping it, sidesteps
/// the guarantee that previously composed layers still execute. Application
/// proceeds regardless; the warning is delivered to the host's
/// [`WarningSink`].
#[derive( Debug, Clone, Error )]
#[error( "module {module} declares overrides for {methods:?}" )]
pub struct OverrideWarning {
	/// The module being applied.
	pub module: ModuleId,
	/// The methods it declares override modifications for.
	pub methods: NEVec<String>,
}

/// A one-way channel for non-fatal composition warnings.
pub trait WarningSink {
	/// Delivers one warning. No acknowledgment is expected.
	fn warn( &mut self, warning: &OverrideWarning ) ;
}

/// The default sink: forwards warnings to the `tracing` subscriber.
#[derive( Debug, Default, Clone, Copy )]
pub struct LogSink ;

impl WarningSink for LogSink {
	fn warn( &mut self, warning: &OverrideWarning ) {
		tracing::warn!(
			module = %warning.module,
			methods = ?warning.methods,
			"module declares override modifications; prefer wrap so composed layers stay on the call path",
		);
	}
}

/// The effective behavior composed onto one host instance: its method table,
/// attribute storage, and the ordered list of role modules merged so far.
///
/// The composed-module list is the instance's *runtime* identity: it "is-a"
/// every module applied to it, while the original type name stays anchored
/// on the facade.
#[derive( Debug, Default )]
pub struct Behavior {
	methods: MethodTable,
	attributes: Attributes,
	composed: Vec<ModuleId>,
}

impl Behavior {

	/// Creates behavior with no methods, attributes, or composed modules.
	pub fn new() -> Self {
		Self::default()
	}

	/// Defines a base method, added only if absent.
	pub fn define_method(
		&mut self,
		method: &str,
		body: impl Fn( &mut Attributes, &[Value] ) -> Value + Send + Sync + 'static,
	) -> bool {
		self.methods.define( method, std::sync::Arc::new( body ))
	}

	/// Whether a method with this name exists.
	pub fn has_method( &self, method: &str ) -> bool {
		self.methods.contains( method )
	}

	/// Invokes a method's full composed call path.
	pub fn call( &mut self, method: &str, arguments: &[Value] ) -> Result<Value, DispatchError> {
		self.methods.invoke( &mut self.attributes, method, arguments )
	}

	/// Reads an attribute.
	pub fn attribute( &self, name: &str ) -> Option<&Value> {
		self.attributes.get( name )
	}

	/// Writes an attribute unconditionally.
	pub fn set_attribute( &mut self, name: impl Into<String>, value: Value ) {
		self.attributes.insert( name.into(), value );
	}

	/// Whether the given module has been composed onto this behavior.
	pub fn does( &self, module: &ModuleId ) -> bool {
		self.composed.contains( module )
	}

	/// Every composed module, in application order.
	pub fn composed_modules( &self ) -> &[ModuleId] {
		&self.composed
	}

}

/// Loads a module and merges it into the target behavior.
///
/// # Errors
/// - [`PluginError::LoadFailure`] when the module cannot be brought into the
/// 	process.
/// - [`PluginError::ApplyFailure`] when the loaded module is not a role, or
/// 	a modifier targets a method the behavior lacks.
pub fn apply(
	behavior: &mut Behavior,
	environment: &mut impl ModuleLoader,
	sink: &mut dyn WarningSink,
	module: &ModuleId,
) -> Result<(), PluginError> {

	environment
		.ensure_loaded( module )
		.map_err(| cause | PluginError::LoadFailure { module: module.clone(), cause })?;

	let role = match environment.loaded_artifact( module ) {
		Some( Artifact::Role( role )) => role,
		_ => return Err( PluginError::ApplyFailure {
			module: module.clone(),
			cause: ApplyCause::NotARole,
		}),
	};

	if let Some( methods ) = role.overridden_methods() {
		sink.warn( &OverrideWarning { module: module.clone(), methods });
	}

	merge( behavior, role )
		.map_err(| cause | PluginError::ApplyFailure { module: module.clone(), cause })?;

	if !behavior.composed.contains( module ) {
		behavior.composed.push( module.clone() );
	}
	tracing::debug!( module = %module, "composed module onto behavior" );
	Ok(())

}

fn merge( behavior: &mut Behavior, role: &Role ) -> Result<(), ApplyCause> {
	for modification in role.modifications() {
		match modification {
			Modification::Method { method, body } => {
				behavior.methods.define( method, body.clone() );
			}
			Modification::Override { method, body } => {
				behavior.methods.replace_body( method, body.clone() );
			}
			Modification::Wrap { method, wrapper } => behavior.methods
				.push_wrap( method, wrapper.clone() )
				.map_err( ApplyCause::NoSuchMethod )?,
			Modification::Before { method, hook } => behavior.methods
				.push_before( method, hook.clone() )
				.map_err( ApplyCause::NoSuchMethod )?,
			Modification::After { method, hook } => behavior.methods
				.push_after( method, hook.clone() )
				.map_err( ApplyCause::NoSuchMethod )?,
			Modification::Attribute { name, value } => {
				behavior.attributes
					.entry( name.clone() )
					.or_insert_with(|| value.clone() );
			}
		}
	}
	Ok(())
}
