use log::trace ;

use crate::{ ModuleDescriptor, PassError };



/// Invokes an initializer's entry points in declared order.
///
/// There is no guard against repeated runs; every pass calls every entry point again.
/// The first failing entry point stops the remaining ones.
pub(crate) fn run<E>(
	descriptor: &ModuleDescriptor<E>,
	context: Option<&E>,
) -> Result<(), PassError> {
	descriptor.functions().unwrap_or_default().iter().try_for_each(| function | {
		trace!( "Calling '{}::{}'", descriptor.name(), function );
		descriptor.module()
			.call( function, context )
			.map_err(| source | PassError::ModuleFailed { module: descriptor.name().to_string(), source })
	})
}
