//! Module capabilities.
//!
//! A module is the value that provides a registered component's behaviour. Which
//! half of the [`Module`] trait gets used depends on the registration's
//! [`Target`]( crate::Target ): selector targets make the module a plugin that is
//! constructed once per matching element, function lists make it an initializer
//! whose named functions run once per pass.

use std::any::Any ;
use std::collections::HashMap ;
use std::rc::Rc ;
use thiserror::Error ;

use crate::Options ;



/// A constructed plugin instance, stored on the element it was bound to.
///
/// Retrieve it with a concrete type through
/// [`ModuleController::instance`]( crate::ModuleController::instance ).
pub type Instance = Rc<dyn Any> ;

/// Failure raised by a module's own code.
///
/// The controller never recovers from these; the running pass is aborted and the
/// error is returned wrapped in [`PassError`]( crate::PassError ).
#[derive( Error, Debug )]
pub enum ModuleError {
	/// The module was bound to elements but provides no construction routine.
	#[error( "Module has no construction routine" )] NotConstructible,
	/// An entry point listed in the registration doesn't exist on the module.
	#[error( "Unknown function: {0}" )] UnknownFunction( String ),
	/// The module's code failed.
	#[error( "Module failure: {0}" )] Failed( Box<dyn std::error::Error> ),
}

impl ModuleError {
	/// Wraps an arbitrary error (or message) raised by module code.
	pub fn failed( err: impl Into<Box<dyn std::error::Error>> ) -> Self {
		Self::Failed( err.into() )
	}
}

/// Behaviour provided by a registered module.
///
/// Both methods have failing default implementations, so a module only implements
/// the half matching the way it is registered.
///
/// # Type Parameters
/// - `E`: The element type of the [`Document`]( crate::Document ) the module runs against
pub trait Module<E> {

	/// Built-in option defaults. Registration options are merged on top of these.
	fn defaults( &self ) -> Options { Options::Null }

	/// Constructs a plugin instance for a single matching element.
	///
	/// # Errors
	/// Fails with [`ModuleError::NotConstructible`] unless overridden.
	fn construct( &self, element: &E, options: &Options ) -> Result<Instance, ModuleError> {
		let _ = ( element, options );
		Err( ModuleError::NotConstructible )
	}

	/// Invokes the named initializer entry point with the pass context.
	///
	/// # Errors
	/// Fails with [`ModuleError::UnknownFunction`] unless overridden.
	fn call( &self, function: &str, context: Option<&E> ) -> Result<(), ModuleError> {
		let _ = context ;
		Err( ModuleError::UnknownFunction( function.to_string() ))
	}

}

type EntryPoint<E> = Box<dyn Fn( Option<&E> ) -> Result<(), ModuleError>> ;

/// An initializer module made of named closures.
///
/// ```
/// use module_controller::{ FunctionTable, Module };
///
/// let module = FunctionTable::<u32>::new()
/// 	.with( "init", | _context | Ok(()) );
///
/// assert!( module.call( "init", None ).is_ok() );
/// assert!( module.call( "missing", None ).is_err() );
/// ```
pub struct FunctionTable<E> {
	functions: HashMap<String, EntryPoint<E>>,
	defaults: Options,
}

impl<E> FunctionTable<E> {

	/// Creates an empty table.
	pub fn new() -> Self {
		Self { functions: HashMap::new(), defaults: Options::Null }
	}

	/// Adds an entry point, replacing any previous one with the same name.
	pub fn with(
		mut self,
		name: impl Into<String>,
		function: impl Fn( Option<&E> ) -> Result<(), ModuleError> + 'static,
	) -> Self {
		self.functions.insert( name.into(), Box::new( function ));
		self
	}

	/// Sets the built-in option defaults.
	pub fn with_defaults( mut self, defaults: Options ) -> Self {
		self.defaults = defaults ;
		self
	}

	/// Names of all entry points, in no particular order.
	pub fn function_names( &self ) -> impl Iterator<Item = &str> {
		self.functions.keys().map( String::as_str )
	}

}

impl<E> Default for FunctionTable<E> {
	fn default() -> Self { Self::new() }
}

impl<E> Module<E> for FunctionTable<E> {

	fn defaults( &self ) -> Options { self.defaults.clone() }

	fn call( &self, function: &str, context: Option<&E> ) -> Result<(), ModuleError> {
		match self.functions.get( function ) {
			Some( entry_point ) => entry_point( context ),
			None => Err( ModuleError::UnknownFunction( function.to_string() )),
		}
	}

}

impl<E> std::fmt::Debug for FunctionTable<E> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "FunctionTable" )
			.field( "functions", &self.functions.keys().collect::<Vec<_>>() )
			.field( "defaults", &self.defaults )
			.finish()
	}
}

/// A plugin module backed by a construction closure.
///
/// ```
/// use std::rc::Rc ;
/// use module_controller::{ Constructor, Instance, Module, ModuleError, Options };
///
/// let module = Constructor::new(| element: &u32, _options: &Options | -> Result<Instance, ModuleError> {
/// 	Ok( Rc::new( *element * 2 ))
/// });
/// let instance = module.construct( &21, &Options::Null ).unwrap();
/// assert_eq!( instance.downcast_ref::<u32>(), Some( &42 ));
/// ```
pub struct Constructor<F> {
	construct: F,
	defaults: Options,
}

impl<F> Constructor<F> {

	/// Wraps a construction closure.
	pub fn new( construct: F ) -> Self {
		Self { construct, defaults: Options::Null }
	}

	/// Sets the built-in option defaults.
	pub fn with_defaults( mut self, defaults: Options ) -> Self {
		self.defaults = defaults ;
		self
	}

}

impl<E, F> Module<E> for Constructor<F>
where
	F: Fn( &E, &Options ) -> Result<Instance, ModuleError>,
{

	fn defaults( &self ) -> Options { self.defaults.clone() }

	fn construct( &self, element: &E, options: &Options ) -> Result<Instance, ModuleError> {
		( self.construct )( element, options )
	}

}

impl<F> std::fmt::Debug for Constructor<F> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "Constructor" )
			.field( "construct", &"<closure>" )
			.field( "defaults", &self.defaults )
			.finish()
	}
}
