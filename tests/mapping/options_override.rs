use serde_json::json ;
use module_controller::{ MappingEntry, ModuleMapping, Registry, Registration };
use crate::call_log::CallLog ;
use crate::fixture_document::NodeId ;

#[test]
fn mapping_options_merged_last() {

	let log = CallLog::new();
	let mapping = ModuleMapping::from_toml_str( r#"
		[slider.options]
		speed = 500
		autoplay = true
	"# ).unwrap();

	let mut registry = Registry::<NodeId>::new().with_mapping( mapping );
	registry.register( Registration::new( "slider" )
		.module( log.plugin( "slider" ))
		.target( ".slider" )
		.options( json!({ "speed": 150, "loop": false }))
	).unwrap();

	let descriptor = &registry.modules()[ 0 ];
	assert_eq!( descriptor.selector(), Some( ".slider" ));
	assert_eq!( descriptor.options(), &json!({ "speed": 500, "loop": false, "autoplay": true }));

}

#[test]
fn mapping_built_in_code() {

	let log = CallLog::new();
	let mut mapping = ModuleMapping::new();
	mapping.insert( "select", MappingEntry { selector: Some( "select.fancy".to_string() ), options: None });
	assert_eq!( mapping.len(), 1 );

	let mut registry = Registry::<NodeId>::new().with_mapping( mapping );
	registry.register( Registration::new( "select" ).module( log.plugin( "select" )).target( "select" )).unwrap();

	assert_eq!( registry.modules()[ 0 ].selector(), Some( "select.fancy" ));
	assert_eq!( registry.modules()[ 0 ].options(), &serde_json::Value::Null );

}
