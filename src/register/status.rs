use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the STATUS (0xF3) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// Used with [`Bmp280::read::<Status>()`](crate::Bmp280::read) or the convenience method
/// [`Bmp280::status`](crate::Bmp280::status).
pub struct Status;
impl Reg for Status { const ADDR: u8 = 0xF3; }

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusFlags {
    measuring: bool,
    im_update: bool,
}

impl StatusFlags {
    pub fn new(measuring: bool, im_update: bool) -> Self {
        Self { measuring, im_update }
    }

    /// Is a conversion running?
    ///
    /// Goes back to [`false`] once the results have been transferred to the data registers.
    pub fn measuring(&self) -> bool { self.measuring }

    /// Is the NVM data being copied to the image registers?
    ///
    /// This happens at power-on-reset and before every conversion.
    pub fn im_update(&self) -> bool { self.im_update }
}

impl Readable for Status {
    type Out = StatusFlags;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(StatusFlags {
            measuring: (b[0] & 0b0000_1000) != 0,
            im_update: (b[0] & 0b0000_0001) != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_decode() {
        let reg = Status::decode(&[0b0000_1000]).unwrap();
        assert!(reg.measuring());
        assert!(!reg.im_update());

        let reg = Status::decode(&[0b0000_0001]).unwrap();
        assert!(!reg.measuring());
        assert!(reg.im_update());

        let reg = Status::decode(&[0b1111_0110]).unwrap();
        assert_eq!(StatusFlags::new(false, false), reg);
    }
}
