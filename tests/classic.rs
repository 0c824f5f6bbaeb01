use sort_test_tools::instantiate_sort_tests;

instantiate_sort_tests!(adjsort::classic::SortImpl);
