use embedded_hal_mock::pin::{Mock as PinMock, State, Transaction as PinTransaction};
use whackamole_firmware::drivers::{MoleBoard, PinBoard};

fn idle_pins<const N: usize>() -> [PinMock; N] {
    core::array::from_fn(|_| PinMock::new(&[]))
}

fn done(pins: &mut [PinMock]) {
    for pin in pins {
        pin.done();
    }
}

#[test]
fn active_low_button_reads_pressed_when_grounded() {
    let buttons = [
        PinMock::new(&[PinTransaction::get(State::Low)]),
        PinMock::new(&[PinTransaction::get(State::High)]),
    ];
    let leds: [PinMock; 2] = idle_pins();
    let mut board = PinBoard::new(buttons, leds);

    assert!(board.read_button(0));
    assert!(!board.read_button(1));

    let (mut buttons, mut leds) = board.release();
    done(&mut buttons);
    done(&mut leds);
}

#[test]
fn active_high_board_inverts_levels() {
    let buttons = [PinMock::new(&[
        PinTransaction::get(State::High),
        PinTransaction::get(State::Low),
    ])];
    let leds = [PinMock::new(&[])];
    let mut board = PinBoard::new(buttons, leds).active_high();

    assert!(board.read_button(0));
    assert!(!board.read_button(0));

    let (mut buttons, mut leds) = board.release();
    done(&mut buttons);
    done(&mut leds);
}

#[test]
fn led_writes_drive_matching_pin() {
    let buttons: [PinMock; 3] = idle_pins();
    let leds = [
        PinMock::new(&[]),
        PinMock::new(&[]),
        PinMock::new(&[
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
        ]),
    ];
    let mut board = PinBoard::new(buttons, leds);

    board.write_led(2, true);
    board.write_led(2, false);

    let (mut buttons, mut leds) = board.release();
    done(&mut buttons);
    done(&mut leds);
}

#[test]
fn out_of_range_slots_touch_no_pins() {
    let buttons: [PinMock; 2] = idle_pins();
    let leds: [PinMock; 2] = idle_pins();
    let mut board = PinBoard::new(buttons, leds);

    assert!(!board.read_button(5));
    board.write_led(5, true);

    let (mut buttons, mut leds) = board.release();
    done(&mut buttons);
    done(&mut leds);
}
