fn main() {
    campaign_frontend::run();
}
