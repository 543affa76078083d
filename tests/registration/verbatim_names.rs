use module_controller::{ ModuleController, Registry, Registration };
use crate::call_log::CallLog ;
use crate::fixture_document::{ FixtureDocument, NodeId };

#[test]
fn registration_names_stored_verbatim() {

	let log = CallLog::new();
	let mut controller = ModuleController::new( Registry::<NodeId>::new() );

	controller.register( Registration::new( "a" ).module( log.initializer( "a" )).target([ "init" ]).dependencies([ " b " ])).unwrap();
	controller.register( Registration::new( " b " ).module( log.initializer( " b " )).target([ "init" ])).unwrap();

	assert_eq!( controller.registry().module_names(), vec![ "a", " b " ]);
	assert!( controller.registry().contains( " b " ));
	assert!( !controller.registry().contains( "b" ));

	let mut document = FixtureDocument::new();
	let ( initialized, unresolved ) = controller.initialize_all( &mut document, None ).unwrap();
	assert!( unresolved.is_empty(), "Left unresolved: {:?}", unresolved );
	assert_eq!( initialized, vec![ " b ", "a" ]);
	assert_eq!( log.entries(), vec![ " b ", "a" ]);

}

#[test]
fn registration_padded_dependency_does_not_match_bare_name() {

	let log = CallLog::new();
	let mut controller = ModuleController::new( Registry::<NodeId>::new() );

	controller.register( Registration::new( "a" ).module( log.initializer( "a" )).target([ "init" ]).dependencies([ " b " ])).unwrap();
	controller.register( Registration::new( "b" ).module( log.initializer( "b" )).target([ "init" ])).unwrap();

	let mut document = FixtureDocument::new();
	let ( initialized, unresolved ) = controller.initialize_all( &mut document, None ).unwrap();
	assert_eq!( initialized, vec![ "b" ]);
	assert_eq!( unresolved.len(), 1 );
	assert_eq!( unresolved[ 0 ].dependency(), " b " );

}
