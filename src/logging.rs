use tracing::Level;

/// Route `tracing` events to the browser console. No-op off wasm, where
/// tests run without a subscriber.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build(),
    );

    #[cfg(not(target_arch = "wasm32"))]
    let _ = level;
}
