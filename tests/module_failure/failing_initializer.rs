use module_controller::{ FunctionTable, ModuleController, ModuleError, PassError, Registry, Registration };
use crate::call_log::CallLog ;
use crate::fixture_document::{ FixtureDocument, NodeId };

#[test]
fn module_failure_initializer_aborts_pass() {

	let log = CallLog::new();
	let mut controller = ModuleController::new( Registry::<NodeId>::new() );

	controller.register( Registration::new( "first" ).module( log.initializer( "first" )).target([ "init" ])).unwrap();
	controller.register( Registration::new( "broken" )
		.module( FunctionTable::new().with( "init", | _ | Err( ModuleError::failed( "boom" ))))
		.target([ "init" ])
	).unwrap();
	controller.register( Registration::new( "last" ).module( log.initializer( "last" )).target([ "init" ])).unwrap();

	let mut document = FixtureDocument::new();
	match controller.initialize_all( &mut document, None ) {
		Err( PassError::ModuleFailed { module, source: ModuleError::Failed( err )}) => {
			assert_eq!( module, "broken" );
			assert_eq!( err.to_string(), "boom" );
		},
		result => panic!( "Expected ModuleFailed, found: {:?}", result ),
	}

	// Work done before the failure stays done
	assert_eq!( log.entries(), vec![ "first" ]);

}

#[test]
fn module_failure_during_release_cascade() {

	let log = CallLog::new();
	let mut controller = ModuleController::new( Registry::<NodeId>::new() );

	controller.register( Registration::new( "dependent" )
		.module( FunctionTable::new().with( "init", | _ | Err( ModuleError::failed( "dependent failed" ))))
		.target([ "init" ])
		.dependencies([ "base" ])
	).unwrap();
	controller.register( Registration::new( "base" ).module( log.initializer( "base" )).target([ "init" ])).unwrap();
	controller.register( Registration::new( "after" ).module( log.initializer( "after" )).target([ "init" ])).unwrap();

	let mut document = FixtureDocument::new();
	let err = controller.initialize_all( &mut document, None ).unwrap_err();

	assert_eq!( err.to_string(), "Module 'dependent' failed: Module failure: dependent failed" );
	assert_eq!( log.entries(), vec![ "base" ]);

}
