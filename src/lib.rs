//! A dependency-ordered initializer for independently authored page modules.
//!
//! Modules register themselves under a name, say which other modules must be ready
//! before them, and are initialized against a document subtree in an order that
//! respects those declarations. No module needs to know where, or in which order,
//! the others were registered.
//!
//! # Core Concepts
//!
//! - [`Module`]: The behaviour a registration provides. Either a construction routine
//! 	(for plugins) or a set of named entry points (for initializers).
//! 	[`Constructor`] and [`FunctionTable`] cover the common cases with closures.
//!
//! - [`Target`]: What a module is applied to. A selector makes a **plugin**, bound
//! 	once to every matching element. A list of function names makes an
//! 	**initializer**, whose entry points run once per pass.
//!
//! - [`Registry`]: The append-only, ordered list of [`ModuleDescriptor`]s. Registering
//! 	goes through [`Registration`] and fails with [`InvalidRegistration`] for
//! 	malformed input.
//!
//! - [`Document`]: The host's DOM. Finds elements by selector and stores the instance
//! 	each plugin constructed per element, which is what keeps repeated passes from
//! 	binding an element twice.
//!
//! - [`ModuleController`]: Runs passes. [`ModuleController::initialize_all`] resolves
//! 	dependencies and initializes everything; [`ModuleController::initialize_bindings_only`]
//! 	re-binds plugins inside freshly inserted content.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap ;
//! use std::rc::Rc ;
//! use module_controller::{
//! 	Constructor, Document, FunctionTable, Instance, ModuleController, ModuleError,
//! 	Options, Registration, Registry,
//! };
//!
//! // A flat page: elements are indices, each carrying a single class name.
//! struct Page {
//! 	classes: Vec<&'static str>,
//! 	instances: HashMap<( usize, String ), Instance>,
//! }
//!
//! impl Document for Page {
//! 	type Element = usize ;
//!
//! 	fn find( &self, _context: Option<&usize>, selector: &str ) -> Vec<usize> {
//! 		self.classes.iter().enumerate()
//! 			.filter(|( _, class )| selector.strip_prefix( '.' ) == Some( **class ))
//! 			.map(|( index, _ )| index )
//! 			.collect()
//! 	}
//!
//! 	fn instance( &self, element: &usize, name: &str ) -> Option<Instance> {
//! 		self.instances.get( &( *element, name.to_string() )).cloned()
//! 	}
//!
//! 	fn attach( &mut self, element: &usize, name: &str, instance: Instance ) {
//! 		self.instances.insert(( *element, name.to_string() ), instance );
//! 	}
//! }
//!
//! struct Slider { speed: u64 }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut controller = ModuleController::new( Registry::<usize>::new() );
//!
//! // Registered first, but waits for "touchable" which is registered later.
//! controller.register(
//! 	Registration::new( "slider" )
//! 		.module( Constructor::new(| _element: &usize, options: &Options | -> Result<Instance, ModuleError> {
//! 			Ok( Rc::new( Slider { speed: options[ "speed" ].as_u64().unwrap_or( 300 ) }))
//! 		}))
//! 		.target( ".slider" )
//! 		.options( serde_json::json!({ "speed": 150 }))
//! 		.dependencies([ "touchable" ]),
//! )?;
//!
//! controller.register(
//! 	Registration::new( "touchable" )
//! 		.module( FunctionTable::<usize>::new().with( "init", | _context | Ok(()) ))
//! 		.target([ "init" ]),
//! )?;
//!
//! let mut page = Page { classes: vec![ "slider", "footer", "slider" ], instances: HashMap::new() };
//! let ( initialized, unresolved ) = controller.initialize_all( &mut page, None )?;
//! assert_eq!( initialized, vec![ "touchable", "slider" ]);
//! assert!( unresolved.is_empty() );
//!
//! // Bound instances stay reachable through the element they were bound to.
//! let slider = controller.instance::<Slider, _>( &page, &2, "slider" ).unwrap();
//! assert_eq!( slider.speed, 150 );
//! # Ok(())
//! # }
//! ```
//!
//! # Dependencies
//!
//! Dependencies are resolved while walking the registry in registration order, not
//! by sorting it first. A module whose dependencies have all completed initializes
//! immediately; any other module waits until the last of them completes, which may
//! release further modules in turn. A module may therefore depend on one registered
//! after it, and chains of any depth resolve as long as they end in modules without
//! dependencies.
//!
//! A dependency that never completes (never registered, part of a cycle, or blocked
//! itself) doesn't fail the pass. The modules waiting on it simply stay uninitialized
//! and are reported as [`UnresolvedDependency`] values next to the list of
//! initialized modules, and logged as warnings through the [`log`] facade.
//!
//! # Failures
//!
//! Malformed registrations are rejected with [`InvalidRegistration`] and nothing is
//! stored. Failures raised by module code ([`ModuleError`]) are not recovered: they
//! abort the running pass and surface as [`PassError`].
//!
//! # Overrides
//!
//! A [`ModuleMapping`] installed with [`Registry::with_mapping`] replaces the selector
//! and merges options of plugins by name, so a page can adapt modules to its markup
//! without touching them.

mod binder ;
mod controller ;
mod descriptor ;
mod document ;
mod mapping ;
mod module ;
mod options ;
mod registration ;
mod registry ;
mod resolver ;
mod runner ;
mod utils ;

pub use controller::{ ModuleController, PassError };
pub use descriptor::{ ModuleDescriptor, ModuleKind, Target };
pub use document::Document ;
pub use mapping::{ ModuleMapping, MappingEntry, MappingError };
pub use module::{ Module, ModuleError, Instance, FunctionTable, Constructor };
pub use options::Options ;
pub use registration::{ Registration, InvalidRegistration };
pub use registry::Registry ;
pub use resolver::{ UnresolvedDependency, UnresolvedReason };
pub use utils::PartialSuccess ;
#[doc( no_inline )]
pub use nonempty_collections::NEVec ;
