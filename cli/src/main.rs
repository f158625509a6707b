fn main() -> ! {
    v_cli::main()
}
