fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        thumbcrafter::start();
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("the page behavior layer only runs on wasm32 targets");
    }
}
