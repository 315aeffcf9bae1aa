/// Liveness check.
pub(crate) async fn alive() -> &'static str {
    "Alive!"
}
