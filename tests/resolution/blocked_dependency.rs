use module_controller::{ ModuleController, Registry, Registration, UnresolvedReason };
use crate::call_log::CallLog ;
use crate::fixture_document::{ FixtureDocument, NodeId };

#[test]
fn resolution_blocked_dependency_propagates() {

	let log = CallLog::new();
	let mut controller = ModuleController::new( Registry::<NodeId>::new() );

	controller.register( Registration::new( "x" ).module( log.initializer( "x" )).target([ "init" ]).dependencies([ "y" ])).unwrap();
	controller.register( Registration::new( "y" ).module( log.initializer( "y" )).target([ "init" ]).dependencies([ "z" ])).unwrap();

	let mut document = FixtureDocument::new();
	let ( initialized, unresolved ) = controller.initialize_all( &mut document, None ).unwrap();

	assert!( initialized.is_empty() );
	assert!( log.entries().is_empty() );

	// Sorted by dependency name
	let reported = unresolved.iter()
		.map(| dependency | ( dependency.dependency(), dependency.reason() ))
		.collect::<Vec<_>>();
	assert_eq!( reported, vec![
		( "y", UnresolvedReason::Blocked ),
		( "z", UnresolvedReason::NotRegistered ),
	]);
	assert!( unresolved[ 0 ].is_waiting( "x" ));
	assert!( unresolved[ 1 ].is_waiting( "y" ));

}
