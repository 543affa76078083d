use module_controller::{ ModuleController, Registry, Registration };
use crate::call_log::CallLog ;
use crate::fixture_document::{ FixtureDocument, NodeId };

#[test]
fn registration_duplicate_names_are_kept() {

	let log = CallLog::new();
	let mut controller = ModuleController::new( Registry::<NodeId>::new() );

	controller.register( Registration::new( "tracking" ).module( log.initializer( "tracking" )).target([ "init" ])).unwrap();
	controller.register( Registration::new( "tracking" ).module( log.initializer( "tracking" )).target([ "init" ])).unwrap();

	assert_eq!( controller.registry().len(), 2 );
	assert!( controller.registry().contains( "tracking" ));

	let mut document = FixtureDocument::new();
	let ( initialized, unresolved ) = controller.initialize_all( &mut document, None ).unwrap();
	assert!( unresolved.is_empty() );
	assert_eq!( initialized, vec![ "tracking", "tracking" ]);
	assert_eq!( log.count( "tracking" ), 2 );

}
