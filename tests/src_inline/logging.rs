use super::*;

#[test]
fn test_init_twice_keeps_first_subscriber() {
    init(true);
    init(false);
    tracing::debug!("still logging after a second init");
}
