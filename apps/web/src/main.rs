mod app;

use app::PredictorPage;

fn main() {
    yew::Renderer::<PredictorPage>::new().render();
}
