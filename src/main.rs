#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::atmega128a::Peripherals;
    use whackamole_firmware::config::{GameConfig, RNG_SEED, WDT_TIMEOUT_MS};
    use whackamole_firmware::drivers::{PinBoard, SerialConsole};
    use whackamole_firmware::game::GameCore;
    use whackamole_firmware::hal::{board, Uart, Watchdog, WatchdogTimeout};
    use whackamole_firmware::os::SystemClock;
    use whackamole_firmware::random::XorShift32;

    #[avr_device::entry]
    fn main() -> ! {
        let Some(dp) = Peripherals::take() else {
            #[allow(clippy::empty_loop)]
            loop {}
        };

        let mut console = SerialConsole::new(Uart::new(dp.USART0));
        let mut board = PinBoard::new(board::buttons(dp.PORTB), board::leds(dp.PORTA));
        let clock = SystemClock::start(dp.TC0);
        let mut watchdog = Watchdog::new(dp.WDT);

        // Enable interrupts globally
        unsafe { avr_device::interrupt::enable() };

        console.write_line("Whack-a-mole v0.1.0").ok();

        let mut game: GameCore<XorShift32> = match GameCore::new(GameConfig::DEFAULT, XorShift32::new(RNG_SEED)) {
            Ok(game) => game,
            Err(_) => {
                console.write_line("Invalid game configuration").ok();
                #[allow(clippy::empty_loop)]
                loop {}
            }
        };

        watchdog.start(WatchdogTimeout::at_least(WDT_TIMEOUT_MS));
        console.write_line("Ready...").ok();

        let mut faults_seen = 0;
        #[cfg(feature = "debug")]
        let mut queue_was_full = false;

        loop {
            if let Some(transition) = game.tick(&mut board, &clock) {
                console.report_transition(&transition).ok();
            }

            let diagnostics = game.diagnostics();
            if diagnostics.fault_count() != faults_seen {
                faults_seen = diagnostics.fault_count();
                if let Some(fault) = diagnostics.last_fault() {
                    console.report_fault(&fault).ok();
                }
            }

            #[cfg(feature = "debug")]
            {
                use ufmt::uwrite;
                let queue = game.queue();
                let full = queue.is_full();
                if full && !queue_was_full {
                    uwrite!(&mut console, "[DBG] queue at capacity ({})\r\n", queue.len()).ok();
                }
                queue_was_full = full;
            }

            watchdog.feed();
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("whackamole_firmware targets the ATmega128; build with --target avr-atmega128");
    eprintln!("the game core is exercised on the host through `cargo test`");
}
