//! Fixed secure-sharing guide, returned verbatim.

pub const SECURE_SHARING_GUIDE: &str = "\
🔐 Anleitung für sicheren Versand:
1. Erstelle ein Konto bei <a href='https://proton.me' target='_blank'>ProtonMail</a>
2. Verfasse deine Nachricht
3. Klicke auf 🔒 und setze ein Passwort
4. Teile das Passwort getrennt (z. B. telefonisch)
";

pub fn secure_sharing_guide() -> &'static str {
    SECURE_SHARING_GUIDE
}
