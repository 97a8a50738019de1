mod fault_isolation_tests;
