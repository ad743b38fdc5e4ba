mod chloropleth_tests;
mod properties_tests;
