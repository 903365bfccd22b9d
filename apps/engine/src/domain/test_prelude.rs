// Proptest configuration for domain unit tests; see
// `engine_test_support::proptest_prelude` for the env knobs.

use proptest::prelude::ProptestConfig;

pub fn proptest_config() -> ProptestConfig {
    engine_test_support::proptest_prelude::proptest_prelude_config()
}
