//! Initialization passes.

use std::rc::Rc ;
use log::{ debug, error, warn };
use thiserror::Error ;

use crate::{ Document, ModuleDescriptor, ModuleError, ModuleKind, Registration, Registry, InvalidRegistration };
use crate::{ binder, runner };
use crate::resolver::{ resolve, UnresolvedDependency };
use crate::utils::PartialSuccess ;



/// A failure that aborted an initialization pass.
///
/// Modules initialized before the failure stay initialized; the remaining ones are
/// not attempted.
#[derive( Error, Debug )]
pub enum PassError {
	/// A module's construction routine or entry point failed.
	#[error( "Module '{module}' failed: {source}" )]
	ModuleFailed {
		module: String,
		#[source] source: ModuleError,
	},
}

/// Runs initialization passes over a [`Registry`].
///
/// Each pass starts from fresh bookkeeping. Plugin instances live in the
/// [`Document`] and are never constructed twice for the same element, so passes
/// can be repeated after new content is inserted.
///
/// # Type Parameters
/// - `E`: The element type of the [`Document`] passes run against
pub struct ModuleController<E> {
	registry: Registry<E>,
}

impl<E: Clone + std::fmt::Debug> ModuleController<E> {

	/// Creates a controller over an existing registry.
	pub fn new( registry: Registry<E> ) -> Self {
		Self { registry }
	}

	/// Registers a module with the underlying registry.
	///
	/// # Errors
	/// See [`Registry::register`].
	pub fn register( &mut self, registration: Registration<E> ) -> Result<(), InvalidRegistration> {
		self.registry.register( registration )
	}

	/// The underlying registry.
	#[inline] pub fn registry( &self ) -> &Registry<E> { &self.registry }

	/// Every registered descriptor, in registration order.
	#[inline] pub fn registered_modules( &self ) -> &[ModuleDescriptor<E>] { self.registry.modules() }

	/// Initializes every registered module in dependency order.
	///
	/// Plugins are bound to matching elements within `context` (or the whole document),
	/// initializers have their entry points called with `context`. Returns the names
	/// of the modules initialized, in completion order, alongside the dependencies
	/// that never completed. Each of those is also logged as a warning.
	///
	/// # Errors
	/// Returns [`PassError::ModuleFailed`] if a module's own code fails. The rest of
	/// the pass is skipped.
	pub fn initialize_all<D>(
		&self,
		document: &mut D,
		context: Option<&E>,
	) -> Result<PartialSuccess<Vec<String>, UnresolvedDependency>, PassError>
	where
		D: Document<Element = E>,
	{

		debug!( "Initializing {} modules within {:?}", self.registry.len(), context );

		let ( initialized, unresolved ) = resolve( self.registry.modules(), | descriptor | {
			debug!( "Initializing {} '{}'", descriptor.kind(), descriptor.name() );
			match descriptor.kind() {
				ModuleKind::Plugin => binder::apply( document, descriptor, context ).map(| _ | ()),
				ModuleKind::Initializer => runner::run( descriptor, context ),
			}
		}).inspect_err(| err | error!( "Initialization pass aborted: {}", err ))?;

		unresolved.iter().for_each(| dependency | warn!( "{}", dependency ));
		debug!( "Initialized {} of {} modules", initialized.len(), self.registry.len() );
		Ok(( initialized, unresolved ))

	}

	/// Binds every registered plugin within `context`, skipping initializers and
	/// dependency ordering.
	///
	/// Intended for freshly inserted content: elements bound by an earlier pass are
	/// skipped and no initializer runs a second time. Returns the number of elements
	/// bound by this call.
	///
	/// # Errors
	/// Returns [`PassError::ModuleFailed`] if a plugin's construction routine fails.
	pub fn initialize_bindings_only<D>(
		&self,
		document: &mut D,
		context: Option<&E>,
	) -> Result<usize, PassError>
	where
		D: Document<Element = E>,
	{
		debug!( "Binding plugins within {:?}", context );
		self.registry.plugins()
			.try_fold( 0, | bound, descriptor | -> Result<usize, PassError> {
				Ok( bound + binder::apply( document, descriptor, context )? )
			})
			.inspect_err(| err | error!( "Binding pass aborted: {}", err ))
	}

	/// The instance a plugin bound to `element`, if it is of type `T`.
	pub fn instance<T: 'static, D>( &self, document: &D, element: &E, name: &str ) -> Option<Rc<T>>
	where
		D: Document<Element = E>,
	{
		document.instance( element, name )?.downcast::<T>().ok()
	}

}

impl<E> Default for ModuleController<E> {
	fn default() -> Self { Self { registry: Registry::new() } }
}

impl<E> std::fmt::Debug for ModuleController<E> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ModuleController" )
			.field( "registry", &self.registry )
			.finish()
	}
}
