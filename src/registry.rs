//! The append-only module registry.

use itertools::Itertools ;
use log::debug ;

use crate::{ ModuleDescriptor, ModuleKind, ModuleMapping, Registration, InvalidRegistration, Target };
use crate::options::merge ;



/// Ordered collection of every registered module.
///
/// Descriptors are kept in registration order and never removed. Registering the
/// same name twice stores both descriptors; the resolver treats them as separate
/// work items.
///
/// # Type Parameters
/// - `E`: The element type of the [`Document`]( crate::Document ) modules run against
pub struct Registry<E> {
	modules: Vec<ModuleDescriptor<E>>,
	mapping: ModuleMapping,
}

impl<E> Registry<E> {

	/// Creates an empty registry without overrides.
	pub fn new() -> Self {
		Self { modules: Vec::new(), mapping: ModuleMapping::default() }
	}

	/// Installs selector and option overrides for plugins registered from now on.
	pub fn with_mapping( mut self, mapping: ModuleMapping ) -> Self {
		self.mapping = mapping ;
		self
	}

	/// Validates a registration and appends its descriptor.
	///
	/// Options are the module's defaults with the registration's options merged on
	/// top. For plugins, an entry in the installed [`ModuleMapping`] then replaces
	/// the selector and merges its options last.
	///
	/// # Errors
	/// Returns [`InvalidRegistration`] if the name is empty or the module or target
	/// is missing. Nothing is stored in that case.
	pub fn register( &mut self, registration: Registration<E> ) -> Result<(), InvalidRegistration> {

		let Registration { name, module, target, options, dependencies } = registration ;

		if name.trim().is_empty() { return Err( InvalidRegistration::EmptyName ) }
		let module = module.ok_or_else(|| InvalidRegistration::MissingModule { name: name.clone() })?;
		let target = target.ok_or_else(|| InvalidRegistration::MissingTarget { name: name.clone() })?;

		let options = merge( module.defaults(), options );
		let ( target, options ) = match target {
			Target::Selector( selector ) => {
				let ( selector, options ) = self.mapping.apply( &name, selector, options );
				( Target::Selector( selector ), options )
			},
			functions @ Target::Functions( _ ) => ( functions, options ),
		};

		debug!( "Registered {} '{}' depending on [{}]", target.kind(), name, dependencies.iter().join( ", " ));
		self.modules.push( ModuleDescriptor::new( name, target, module, options, dependencies ));
		Ok(())

	}

	/// Every descriptor, in registration order.
	#[inline] pub fn modules( &self ) -> &[ModuleDescriptor<E>] { &self.modules }

	/// Names of every descriptor, in registration order.
	pub fn module_names( &self ) -> Vec<&str> {
		self.modules.iter().map( ModuleDescriptor::name ).collect()
	}

	/// Plugin descriptors, in registration order.
	pub fn plugins( &self ) -> impl Iterator<Item = &ModuleDescriptor<E>> {
		self.modules.iter().filter(| descriptor | descriptor.kind() == ModuleKind::Plugin )
	}

	/// Names of plugin descriptors, in registration order.
	pub fn plugin_names( &self ) -> Vec<&str> {
		self.plugins().map( ModuleDescriptor::name ).collect()
	}

	/// Whether any descriptor is registered under `name`.
	pub fn contains( &self, name: &str ) -> bool { is_registered( &self.modules, name ) }

	#[inline] pub fn len( &self ) -> usize { self.modules.len() }

	#[inline] pub fn is_empty( &self ) -> bool { self.modules.is_empty() }

}

/// Whether any of `modules` is registered under `name`.
pub(crate) fn is_registered<E>( modules: &[ModuleDescriptor<E>], name: &str ) -> bool {
	modules.iter().any(| descriptor | descriptor.name() == name )
}

impl<E> Default for Registry<E> {
	fn default() -> Self { Self::new() }
}

impl<E> std::fmt::Debug for Registry<E> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "Registry" )
			.field( "modules", &self.modules )
			.field( "mapping", &self.mapping )
			.finish()
	}
}
