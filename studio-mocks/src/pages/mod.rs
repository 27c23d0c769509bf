mod mock_index;

pub use mock_index::{MockHelloWorld, MockIndex, MockProductPage};
