//! Registration requests.

use std::rc::Rc ;
use thiserror::Error ;

use crate::{ Module, Options, Target };



/// A malformed registration, rejected before anything is stored.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
pub enum InvalidRegistration {
	/// The module name is empty or whitespace.
	#[error( "No module name defined" )]
	EmptyName,
	/// No module value was supplied.
	#[error( "No module defined for registration of '{name}'" )]
	MissingModule { name: String },
	/// Neither a selector nor a list of entry points was supplied.
	#[error( "No selector or entry point list defined for registration of '{name}'" )]
	MissingTarget { name: String },
}

/// A request to register a module, submitted with
/// [`Registry::register`]( crate::Registry::register ).
///
/// Every part except the name is optional at construction time so that incomplete
/// requests can be reported as [`InvalidRegistration`] instead of failing to build.
///
/// ```
/// use module_controller::{ FunctionTable, Registration, Registry };
///
/// let mut registry = Registry::<u32>::new();
/// registry.register(
/// 	Registration::new( "footer" )
/// 		.module( FunctionTable::<u32>::new().with( "init", | _ | Ok(()) ))
/// 		.target([ "init" ])
/// 		.dependencies([ "touchable" ]),
/// ).unwrap();
///
/// assert_eq!( registry.module_names(), vec![ "footer" ]);
/// ```
#[must_use = "submit the registration with Registry::register"]
pub struct Registration<E> {
	pub(crate) name: String,
	pub(crate) module: Option<Rc<dyn Module<E>>>,
	pub(crate) target: Option<Target>,
	pub(crate) options: Options,
	pub(crate) dependencies: Vec<String>,
}

impl<E> Registration<E> {

	/// Starts a registration under `name`.
	pub fn new( name: impl Into<String> ) -> Self {
		Self {
			name: name.into(),
			module: None,
			target: None,
			options: Options::Null,
			dependencies: Vec::with_capacity( 0 ),
		}
	}

	/// Sets the module providing the behaviour.
	pub fn module( self, module: impl Module<E> + 'static ) -> Self {
		self.shared_module( Rc::new( module ))
	}

	/// Sets a module that is shared with other registrations.
	pub fn shared_module( mut self, module: Rc<dyn Module<E>> ) -> Self {
		self.module = Some( module );
		self
	}

	/// Sets the selector or entry point list.
	pub fn target( mut self, target: impl Into<Target> ) -> Self {
		self.target = Some( target.into() );
		self
	}

	/// Sets option overrides, merged over the module's defaults.
	pub fn options( mut self, options: Options ) -> Self {
		self.options = options ;
		self
	}

	/// Sets the names of modules that must initialize first.
	pub fn dependencies( mut self, dependencies: impl IntoIterator<Item = impl Into<String>> ) -> Self {
		self.dependencies = dependencies.into_iter().map( Into::into ).collect();
		self
	}

	/// The requested module name.
	#[inline] pub fn name( &self ) -> &str { &self.name }

}

impl<E> std::fmt::Debug for Registration<E> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "Registration" )
			.field( "name", &self.name )
			.field( "module", &self.module.as_ref().map(| _ | "<Module>" ))
			.field( "target", &self.target )
			.field( "options", &self.options )
			.field( "dependencies", &self.dependencies )
			.finish()
	}
}
