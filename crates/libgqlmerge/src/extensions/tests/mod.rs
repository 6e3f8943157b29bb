mod extend_schema_tests;
