/// Report the toolchain version the binary was built with.
///
/// Pure local computation: no state, no awaits, answers 200 regardless of
/// database connectivity.
pub async fn node_version() -> &'static str {
    concat!("This app is using rustc version: ", env!("RUSTC_VERSION"))
}
