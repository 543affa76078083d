//! Registered module records.
//!
//! A [`ModuleDescriptor`] is created by [`Registry::register`]( crate::Registry::register )
//! and never changes afterwards. It is the unit of work the resolver schedules.

use std::rc::Rc ;

use crate::{ Module, Options };



/// The two shapes a registered module can take.
#[derive( Copy, Clone, Eq, PartialEq, Hash, Debug )]
pub enum ModuleKind {
	/// Bound to every element matching a selector, constructed at most once per element.
	Plugin,
	/// A list of entry points run once per pass.
	Initializer,
}

impl std::fmt::Display for ModuleKind {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result { write!( f, "{:?}", self )}
}

/// What a module is applied to.
///
/// The target decides the [`ModuleKind`] of a registration: a selector makes a plugin,
/// a list of function names makes an initializer.
///
/// ```
/// use module_controller::{ ModuleKind, Target };
///
/// assert_eq!( Target::from( ".slider" ).kind(), ModuleKind::Plugin );
/// assert_eq!( Target::from([ "init", "bind" ]).kind(), ModuleKind::Initializer );
/// ```
#[derive( Clone, Eq, PartialEq, Hash, Debug )]
pub enum Target {
	/// Selector matched against the pass context.
	Selector( String ),
	/// Entry point names, invoked in order.
	Functions( Vec<String> ),
}

impl Target {

	/// Builds a selector target.
	pub fn selector( selector: impl Into<String> ) -> Self {
		Self::Selector( selector.into() )
	}

	/// Builds an entry point list target.
	pub fn functions( functions: impl IntoIterator<Item = impl Into<String>> ) -> Self {
		Self::Functions( functions.into_iter().map( Into::into ).collect() )
	}

	/// The kind of module this target produces.
	#[inline]
	pub fn kind( &self ) -> ModuleKind {
		match self {
			Self::Selector( _ ) => ModuleKind::Plugin,
			Self::Functions( _ ) => ModuleKind::Initializer,
		}
	}

}

impl From<&str> for Target {
	fn from( selector: &str ) -> Self { Self::selector( selector ) }
}

impl From<String> for Target {
	fn from( selector: String ) -> Self { Self::Selector( selector ) }
}

impl From<Vec<String>> for Target {
	fn from( functions: Vec<String> ) -> Self { Self::Functions( functions ) }
}

impl From<Vec<&str>> for Target {
	fn from( functions: Vec<&str> ) -> Self { Self::functions( functions ) }
}

impl<const N: usize> From<[&str; N]> for Target {
	fn from( functions: [&str; N] ) -> Self { Self::functions( functions ) }
}

/// An immutable record describing one registered module.
///
/// # Type Parameters
/// - `E`: The element type of the [`Document`]( crate::Document ) the module runs against
pub struct ModuleDescriptor<E> {
	/// Registration name, also the vocabulary for dependency declarations
	name: String,
	/// Selector or entry point list
	target: Target,
	/// The behaviour provider
	module: Rc<dyn Module<E>>,
	/// Module defaults merged with registration and mapping overrides
	options: Options,
	/// Names that must complete before this module may initialize
	dependencies: Vec<String>,
}

impl<E> ModuleDescriptor<E> {

	pub(crate) fn new(
		name: String,
		target: Target,
		module: Rc<dyn Module<E>>,
		options: Options,
		dependencies: Vec<String>,
	) -> Self {
		Self { name, target, module, options, dependencies }
	}

	/// Registration name.
	#[inline] pub fn name( &self ) -> &str { &self.name }

	/// Whether this is a plugin or an initializer.
	#[inline] pub fn kind( &self ) -> ModuleKind { self.target.kind() }

	/// Selector or entry point list.
	#[inline] pub fn target( &self ) -> &Target { &self.target }

	/// The selector, if this is a plugin.
	#[inline]
	pub fn selector( &self ) -> Option<&str> {
		match &self.target {
			Target::Selector( selector ) => Some( selector ),
			Target::Functions( _ ) => None,
		}
	}

	/// The entry point names, if this is an initializer.
	#[inline]
	pub fn functions( &self ) -> Option<&[String]> {
		match &self.target {
			Target::Selector( _ ) => None,
			Target::Functions( functions ) => Some( functions ),
		}
	}

	/// The behaviour provider.
	#[inline] pub fn module( &self ) -> &dyn Module<E> { self.module.as_ref() }

	/// Effective options handed to the module.
	#[inline] pub fn options( &self ) -> &Options { &self.options }

	/// Declared dependency names, in declaration order.
	#[inline] pub fn dependencies( &self ) -> &[String] { &self.dependencies }

}

impl<E> Clone for ModuleDescriptor<E> {
	fn clone( &self ) -> Self {
		Self {
			name: self.name.clone(),
			target: self.target.clone(),
			module: Rc::clone( &self.module ),
			options: self.options.clone(),
			dependencies: self.dependencies.clone(),
		}
	}
}

impl<E> std::fmt::Debug for ModuleDescriptor<E> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ModuleDescriptor" )
			.field( "name", &self.name )
			.field( "target", &self.target )
			.field( "module", &"<Module>" )
			.field( "options", &self.options )
			.field( "dependencies", &self.dependencies )
			.finish()
	}
}
