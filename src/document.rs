//! The DOM collaborator.
//!
//! The controller never inspects markup itself. Selection and per-element instance
//! storage are delegated to a [`Document`] implementation supplied by the host.

use crate::Instance ;



/// Element selection and per-element instance storage.
///
/// Instance storage is what makes plugin binding idempotent: an element that already
/// holds an instance under a module's name is skipped on every later pass. Storage
/// must therefore outlive individual passes.
pub trait Document {

	/// Handle to a single element.
	type Element: Clone + std::fmt::Debug ;

	/// Returns every element matching `selector` below `context`, or in the whole
	/// document when no context is given, in document order.
	fn find( &self, context: Option<&Self::Element>, selector: &str ) -> Vec<Self::Element> ;

	/// The instance bound to `element` under the module name `name`, if any.
	fn instance( &self, element: &Self::Element, name: &str ) -> Option<Instance> ;

	/// Records `instance` as the binding of `element` under `name`.
	fn attach( &mut self, element: &Self::Element, name: &str, instance: Instance );

}
