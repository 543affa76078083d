#[macro_export]
macro_rules! assert_no_unresolved {
	( $unresolved:expr ) => {
		if !$unresolved.is_empty() { panic!( "Left unresolved: {:?}", $unresolved ) }
	};
}
