use mockall::mock;
use spemu_core::soc::Console;
use std::io;

mock! {
    pub Console {}
    impl Console for Console {
        fn write_line(&mut self, text: &str) -> io::Result<()>;
        fn read_line(&mut self) -> io::Result<Option<String>>;
    }
}
