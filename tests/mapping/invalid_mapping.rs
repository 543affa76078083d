use module_controller::{ MappingError, ModuleMapping };

#[test]
fn invalid_mapping_malformed_toml() {
	match ModuleMapping::from_toml_str( "[slider\nselector = " ) {
		Err( MappingError::Toml( _ )) => {},
		result => panic!( "Expected Toml error, found: {:?}", result ),
	}
}

#[test]
fn invalid_mapping_unknown_key() {
	let result = ModuleMapping::from_toml_str( r#"
		[slider]
		selectr = ".carousel"
	"# );
	assert!( matches!( result, Err( MappingError::Toml( _ ))));
}

#[test]
fn invalid_mapping_empty_source() {
	let mapping = ModuleMapping::from_toml_str( "" ).unwrap();
	assert!( mapping.is_empty() );
}
