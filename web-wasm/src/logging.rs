//! tracing の出力先をブラウザのコンソールにする

use tracing_wasm::WASMLayerConfigBuilder;

/// レベルごとに console.debug / info / warn / error へ振り分ける
pub fn init() {
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::DEBUG)
            .build(),
    );
}
