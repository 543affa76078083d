use module_controller::{ ModuleController, Registry, Registration };
use crate::call_log::CallLog ;
use crate::fixture_document::{ FixtureDocument, NodeId };

#[test]
fn resolution_independent_modules_in_registration_order() {

	let log = CallLog::new();
	let mut controller = ModuleController::new( Registry::<NodeId>::new() );
	[ "header", "footer", "tracking" ].into_iter().for_each(| name | controller
		.register( Registration::new( name ).module( log.initializer( name )).target([ "init" ]))
		.unwrap()
	);

	let mut document = FixtureDocument::new();
	let ( initialized, unresolved ) = controller.initialize_all( &mut document, None ).unwrap();
	assert_no_unresolved!( unresolved );

	assert_eq!( initialized, vec![ "header", "footer", "tracking" ]);
	assert_eq!( log.entries(), vec![ "header", "footer", "tracking" ]);

}

#[test]
fn resolution_empty_registry() {

	let controller = ModuleController::new( Registry::<NodeId>::new() );
	let mut document = FixtureDocument::new();

	let ( initialized, unresolved ) = controller.initialize_all( &mut document, None ).unwrap();
	assert_no_unresolved!( unresolved );
	assert!( initialized.is_empty() );

}
