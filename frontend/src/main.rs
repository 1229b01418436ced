fn main() {
    academic_portal_frontend::start();
}
