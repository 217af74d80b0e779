mod key_index_map_tests;
