cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        compile_error!("courier-shared only ships a native clock backend, wasm targets are not supported yet");
    } else {
        mod native;
        pub use native::*;
    }
}
