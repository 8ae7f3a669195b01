pub const MAP_PAGE_HTML: &str = r#"<!doctype html>
<html lang="pt-BR">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>SARA - Mapa</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"></script>
  <style>
    body {
      margin: 0;
      display: flex;
      height: 100vh;
      font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
      background: url("/assets/fundos/fundo_mapa.png") center / cover fixed;
    }
    #sidebar {
      width: 300px;
      overflow-y: auto;
      padding: 1rem;
      background: rgba(255, 255, 255, 0.92);
      border-right: 1px solid #ddd;
    }
    #sidebar img.logo { width: 100%; }
    #main {
      flex: 1;
      display: flex;
      flex-direction: column;
      padding: 1rem;
    }
    #main h1 { font-size: 1.3rem; margin: 0 0 .75rem 0; }
    #map { flex: 1; border-radius: 1rem; }
    .legend-row { display: flex; align-items: center; gap: .5rem; margin: .35rem 0; }
    .legend-row img { width: 32px; height: 32px; }
    .warning {
      display: none;
      padding: .75rem 1rem;
      margin-bottom: .75rem;
      border-radius: .5rem;
      background: #fff4ce;
      color: #6b5200;
    }
  </style>
</head>

<body>
  <aside id="sidebar">
    <img class="logo" src="/assets/logo/residencia_cts.png" alt="" />
    <hr />
    <h2>Filtros</h2>
    <p>Selecione as categorias de pontos que deseja visualizar:</p>
    <div id="filters"></div>
    <hr />
    <h3>Legenda</h3>
    <div id="legend"></div>
    <hr />
    <small>SARA - Sistema Analítico de Resíduos e Ambiente</small>
  </aside>

  <main id="main">
    <h1>SARA - Sistema Analítico de Resíduos e Ambiente (Sol Nascente)</h1>
    <div id="warning" class="warning"></div>
    <div id="map"></div>
  </main>

  <script>
    (function () {
      const map = L.map('map');
      let tiles = null;
      const markers = L.layerGroup().addTo(map);
      const warning = document.getElementById('warning');

      function selectedCodes() {
        return Array.from(document.querySelectorAll('#filters input:checked')).map(i => i.value);
      }

      async function refresh() {
        const query = encodeURIComponent(selectedCodes().join(','));
        const response = await fetch('/api/map?categories=' + query);
        const view = await response.json();
        markers.clearLayers();

        if (!response.ok) {
          warning.textContent = view.error;
          warning.style.display = 'block';
          return;
        }
        if (!view.center) {
          warning.textContent = view.message;
          warning.style.display = 'block';
          return;
        }

        warning.style.display = 'none';
        if (!tiles) {
          tiles = L.tileLayer(view.tile_url, { attribution: view.tile_attribution }).addTo(map);
        }
        map.setView([view.center.latitude, view.center.longitude], view.zoom);
        for (const m of view.markers) {
          const icon = L.icon({ iconUrl: m.icon_url, iconSize: m.icon_size, iconAnchor: m.icon_anchor });
          L.marker([m.latitude, m.longitude], { icon }).bindPopup(m.popup_html).addTo(markers);
        }
      }

      async function init() {
        const response = await fetch('/api/categories');
        const data = await response.json();

        const filters = document.getElementById('filters');
        for (const option of data.options) {
          const label = document.createElement('label');
          label.style.display = 'block';
          const input = document.createElement('input');
          input.type = 'checkbox';
          input.value = option.code;
          input.checked = option.selected;
          input.addEventListener('change', refresh);
          label.appendChild(input);
          label.appendChild(document.createTextNode(' ' + option.text));
          filters.appendChild(label);
        }

        const legend = document.getElementById('legend');
        for (const entry of data.legend) {
          const row = document.createElement('div');
          row.className = 'legend-row';
          const img = document.createElement('img');
          img.src = entry.icon_url;
          const text = document.createElement('div');
          const title = document.createElement('strong');
          title.textContent = 'Pin ' + entry.code;
          text.appendChild(title);
          text.appendChild(document.createElement('br'));
          text.appendChild(document.createTextNode(entry.label));
          row.appendChild(img);
          row.appendChild(text);
          legend.appendChild(row);
        }

        await refresh();
      }

      init();
    })();
  </script>
</body>

</html>
"#;
