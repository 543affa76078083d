use module_controller::{ FunctionTable, ModuleController, Registry, Registration };
use crate::call_log::CallLog ;
use crate::fixture_document::{ FixtureDocument, NodeId };

fn recording_table( log: &CallLog, functions: &[&'static str] ) -> FunctionTable<NodeId> {
	functions.iter().fold( FunctionTable::new(), | table, &function | {
		let log = log.clone();
		table.with( function, move | _ | {
			log.record( function );
			Ok(())
		})
	})
}

#[test]
fn resolution_entry_points_in_declared_order() {

	let log = CallLog::new();
	let mut controller = ModuleController::new( Registry::<NodeId>::new() );
	controller.register( Registration::new( "footer" )
		.module( recording_table( &log, &[ "first", "second" ]))
		.target([ "second", "first", "second" ])
	).unwrap();

	let mut document = FixtureDocument::new();
	let ( initialized, unresolved ) = controller.initialize_all( &mut document, None ).unwrap();
	assert_no_unresolved!( unresolved );

	assert_eq!( initialized, vec![ "footer" ]);
	assert_eq!( log.entries(), vec![ "second", "first", "second" ]);

}
