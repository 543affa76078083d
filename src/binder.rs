use log::trace ;

use crate::{ Document, ModuleDescriptor, PassError };



/// Binds a plugin to every matching element within `context` that doesn't hold an
/// instance under the plugin's name yet.
///
/// Returns the number of elements bound by this call. Descriptors without a
/// selector bind nothing.
pub(crate) fn apply<D: Document>(
	document: &mut D,
	descriptor: &ModuleDescriptor<D::Element>,
	context: Option<&D::Element>,
) -> Result<usize, PassError> {

	let Some( selector ) = descriptor.selector() else { return Ok( 0 ) };

	document.find( context, selector ).into_iter().try_fold( 0, | bound, element | -> Result<usize, PassError> {

		if document.instance( &element, descriptor.name() ).is_some() {
			trace!( "Skipping {:?}, already bound to '{}'", element, descriptor.name() );
			return Ok( bound );
		}

		let instance = descriptor.module()
			.construct( &element, descriptor.options() )
			.map_err(| source | PassError::ModuleFailed { module: descriptor.name().to_string(), source })?;
		document.attach( &element, descriptor.name(), instance );
		trace!( "Bound '{}' to {:?}", descriptor.name(), element );
		Ok( bound + 1 )

	})

}
