mod circuit_tests;
